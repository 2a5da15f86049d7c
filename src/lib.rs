//! Startattoo: circular astronomical/calendar diagrams rendered as SVG
//!
//! This crate lays out a "tattoo" chart for a single moment in time:
//! concentric orbit rings, planet markers placed at their heliocentric
//! longitudes, a sun marker, and an optional embedded clock face (hour and
//! minute hands, month-of-year ticks, day-of-week dots). The layout engine is
//! a pure function from (timestamp, canvas size, style) to an ordered list of
//! drawing primitives; sinks turn that list into an SVG document.
//!
//! ```no_run
//! use startattoo::canvas::SvgCanvas;
//! use startattoo::ephemeris::KeplerEphemeris;
//! use startattoo::scene::{compose, SceneConfig};
//! use startattoo::style::Style;
//!
//! let at = chrono::DateTime::parse_from_rfc3339("2024-03-15T18:30:00Z").unwrap();
//! let config = SceneConfig::new(500.0, Style::dark());
//! let scene = compose(&KeplerEphemeris::new(), at, &config).unwrap();
//!
//! let mut canvas = SvgCanvas::new(500.0);
//! scene.render(&mut canvas);
//! canvas.save("tattoo.svg").unwrap();
//! ```

use thiserror::Error;

pub mod bodies;
pub mod canvas;
pub mod clock;
pub mod constants;
pub mod ephemeris;
pub mod geometry;
pub mod radius;
pub mod scene;
pub mod style;

// Re-export commonly used types
pub use bodies::Body;
pub use canvas::{CanvasDimensions, CanvasSink, Primitive};
pub use ephemeris::{EphemerisProvider, KeplerEphemeris, Planet};
pub use scene::{compose, Scene, SceneConfig};
pub use style::{Color, Style};

/// Main error type for the startattoo library
#[derive(Debug, Error)]
pub enum TattooError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Style error: {0}")]
    StyleError(String),

    #[error("Ephemeris error: {0}")]
    EphemerisError(#[from] ephemeris::EphemerisError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for startattoo operations
pub type Result<T> = std::result::Result<T, TattooError>;
