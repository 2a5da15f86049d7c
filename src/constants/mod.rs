//! Constants module for the tattoo layout
//!
//! Every visually tuned number in the layout lives here as a named constant.
//! None of these are physical laws; they are design choices carried over from
//! the original tattoo artwork.

use std::f64::consts::PI;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Fraction of a full turn that moves "angle zero" from 3 o'clock to 12 o'clock
pub const QUARTER_TURN: f64 = 0.25;

// Orbit ring layout
/// Number of planetary orbit rings in the full chart
pub const ORBIT_COUNT: usize = 8;
/// Number of rings when restricted to the inner planets (Mercury..Mars)
pub const INNER_ORBIT_COUNT: usize = 4;
/// Pixel radius of the innermost orbit ring
pub const FIRST_ORBIT_RADIUS_PX: f64 = 50.0;
/// Canvas widths at or below this produce degenerate (non-increasing) rings
pub const MIN_CANVAS_WIDTH_PX: f64 = 100.0;
/// Stroke width of an orbit ring
pub const ORBIT_RING_STROKE_WIDTH: f64 = 2.0;

// Markers
/// Sun marker radius as a fraction of canvas width
pub const SUN_RADIUS_FRACTION: f64 = 0.04;
/// Weekday dot radius as a fraction of canvas width
pub const WEEKDAY_DOT_FRACTION: f64 = 0.008;

/// Calibration offset, in radians, added to every planet's ephemeris
/// longitude before placement.
///
/// Inherited from the original artwork, where it aligns the reference
/// direction of the design epoch with the top of the canvas. The intent was
/// never documented upstream, so the value is preserved verbatim; override it
/// per scene via [`crate::scene::SceneConfig::calibration_rad`] rather than
/// editing it here.
pub const LONGITUDE_CALIBRATION_RAD: f64 = 2.9939488041;

// Clock face
/// Orbit index of the hour hand's tip
pub const HOUR_HAND_ORBIT: f64 = 6.0;
/// Stroke width of the hour hand
pub const HOUR_HAND_STROKE_WIDTH: f64 = 3.0;
/// Orbit index of the minute hand's tip (one ring past the outermost orbit)
pub const MINUTE_HAND_ORBIT: f64 = 9.0;
/// Stroke width of the minute hand
pub const MINUTE_HAND_STROKE_WIDTH: f64 = 2.0;
/// Orbit ring carrying the twelve month ticks
pub const MONTH_TICK_ORBIT: f64 = 3.0;
/// Outward length of a month tick, in pixels
pub const MONTH_TICK_LENGTH_PX: f64 = 8.0;
/// Stroke width of a month tick
pub const MONTH_TICK_STROKE_WIDTH: f64 = 3.0;
/// Orbit index of the first weekday dot; subsequent dots step outward by one
pub const WEEKDAY_FIRST_ORBIT: f64 = 1.5;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Unix epoch (1970-01-01T00:00:00Z) as Julian date
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
