//! Style configuration: colors, presets, and feature toggles
//!
//! A [`Style`] is a pure data record; it carries no behavior and is never
//! mutated after construction. Two presets ship with the crate ("light" and
//! "dark"); callers may load their own record from JSON as long as it
//! satisfies the same field set. A malformed or incomplete record is rejected
//! before any drawing begins.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{Result, TattooError};

/// A drawing color: either a named SVG color or an explicit RGB triple.
///
/// Serialized as a string, either the bare name (`"goldenrod"`) or
/// `"rgb(r,g,b)"` with channels in 0..=255.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// A named color string, e.g. `"black"` or `"goldenrod"`
    Named(String),
    /// An explicit RGB triple
    Rgb(u8, u8, u8),
}

impl Color {
    /// Convenience constructor for a named color
    pub fn named(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => write!(f, "{}", name),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = TattooError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let channels: Vec<&str> = body.split(',').map(str::trim).collect();
            if channels.len() != 3 {
                return Err(TattooError::StyleError(format!(
                    "expected three channels in '{}'",
                    s
                )));
            }
            let mut rgb = [0u8; 3];
            for (slot, text) in rgb.iter_mut().zip(&channels) {
                *slot = text.parse::<u8>().map_err(|_| {
                    TattooError::StyleError(format!("bad channel '{}' in '{}'", text, s))
                })?;
            }
            return Ok(Color::Rgb(rgb[0], rgb[1], rgb[2]));
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Color::Named(s.to_string()))
        } else {
            Err(TattooError::StyleError(format!("unrecognized color '{}'", s)))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, String> {
        value.parse().map_err(|e: TattooError| e.to_string())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

/// Immutable bundle of colors and feature toggles for one rendering mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Style {
    /// Fill of the full-canvas background disc
    pub background_fill: Color,
    /// Fill of planet and sun markers
    pub planet_fill: Color,
    /// Stroke of the orbit rings
    pub orbit_stroke: Color,
    /// Stroke of the clock hands and fill of the weekday dots
    pub clock_stroke: Color,
    /// Stroke of the month ticks
    pub month_marker_stroke: Color,
    /// Whether the clock face (hands, month ticks, weekday dots) is drawn
    pub show_clock: bool,
}

lazy_static! {
    static ref PRESETS: HashMap<&'static str, Style> = {
        let mut presets = HashMap::new();
        presets.insert("dark", Style {
            background_fill: Color::Rgb(18, 18, 28),
            planet_fill: Color::named("white"),
            orbit_stroke: Color::Rgb(90, 90, 110),
            clock_stroke: Color::named("goldenrod"),
            month_marker_stroke: Color::Rgb(140, 140, 160),
            show_clock: true,
        });
        presets.insert("light", Style {
            background_fill: Color::named("white"),
            planet_fill: Color::named("black"),
            orbit_stroke: Color::Rgb(170, 170, 170),
            clock_stroke: Color::Rgb(120, 90, 20),
            month_marker_stroke: Color::Rgb(110, 110, 110),
            show_clock: true,
        });
        presets
    };
}

impl Style {
    /// Look up a named preset ("light" or "dark").
    pub fn preset(name: &str) -> Result<Style> {
        PRESETS.get(name).cloned().ok_or_else(|| {
            TattooError::ConfigError(format!(
                "unknown style preset '{}' (expected one of: {})",
                name,
                preset_names().join(", ")
            ))
        })
    }

    /// The dark preset
    pub fn dark() -> Style {
        PRESETS["dark"].clone()
    }

    /// The light preset
    pub fn light() -> Style {
        PRESETS["light"].clone()
    }

    /// Load a style record from a JSON file.
    ///
    /// The record must supply every field; missing fields, unknown fields,
    /// and malformed color strings are configuration errors.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Style> {
        let file = File::open(path.as_ref())?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            TattooError::ConfigError(format!(
                "malformed style record {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }
}

/// Names of the built-in presets, sorted
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
