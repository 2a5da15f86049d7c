//! Tattoo chart generator
//!
//! Renders the circular astronomical/calendar diagram for a given date to an
//! SVG file.
//!
//! Usage:
//!   cargo run --bin tattoo -- 2024-03-15T18:30:00Z -o tattoo.svg

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{ArgAction, Parser};

use startattoo::canvas::SvgCanvas;
use startattoo::ephemeris::KeplerEphemeris;
use startattoo::scene::{compose, SceneConfig};
use startattoo::style::Style;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Astronomical/calendar tattoo chart generator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Renders a circular planetary/calendar diagram for a date as SVG",
    long_about = None
)]
struct Args {
    /// Date to render, as RFC 3339 (2024-03-15T18:30:00Z) or YYYY-MM-DD
    date: String,

    /// Output SVG file
    #[arg(short, long, default_value = "tattoo.svg")]
    output: PathBuf,

    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 500.0)]
    size: f64,

    /// Style preset name
    #[arg(short, long, default_value = "dark")]
    style: String,

    /// JSON file with a custom style record (overrides --style)
    #[arg(long)]
    style_file: Option<PathBuf>,

    /// Restrict the chart to the inner planets (Mercury through Mars)
    #[arg(long, action = ArgAction::SetTrue)]
    inner_planets: bool,
}

/// Parse the date argument as RFC 3339, or as a bare date at midnight UTC
fn parse_date(text: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed);
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| format!("unrecognized date '{}' (expected RFC 3339 or YYYY-MM-DD)", text))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date '{}'", text))?;
    Ok(midnight
        .and_utc()
        .fixed_offset())
}

fn load_style(args: &Args) -> Result<Style> {
    if let Some(path) = &args.style_file {
        return Ok(Style::from_json_file(path)?);
    }
    Ok(Style::preset(&args.style)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let at = parse_date(&args.date)?;
    let style = load_style(&args)?;

    let config = SceneConfig::new(args.size, style).inner_planets_only(args.inner_planets);
    let scene = compose(&KeplerEphemeris::new(), at, &config)?;

    let mut canvas = SvgCanvas::new(args.size);
    scene.render(&mut canvas);
    canvas.save(&args.output)?;

    println!(
        "Rendered {} bodies for {} into {}",
        scene.bodies().len(),
        at,
        args.output.display()
    );

    Ok(())
}
