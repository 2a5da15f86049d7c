//! Geometry helpers shared by every drawable body
//!
//! All angular conventions in the chart agree on one rule: a proportion of
//! zero points straight up from the canvas center ("12 o'clock"), and angles
//! increase clockwise in screen coordinates (the canvas y axis grows
//! downward, so the raw trigonometric direction comes out counter-clockwise
//! in math terms and clockwise on screen).

use nalgebra::Point2;

use crate::constants::{QUARTER_TURN, TAU};

/// Convert a polar offset around `center` into canvas coordinates.
///
/// # Arguments
///
/// * `center` - Origin of the polar frame, in canvas pixels
/// * `radius` - Distance from the center, in pixels
/// * `angle` - Angle in radians; `-PI/2` points at the top of the canvas
pub fn polar_to_cartesian(center: Point2<f64>, radius: f64, angle: f64) -> Point2<f64> {
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Convert a cycle fraction in `[0, 1)` into an angle in radians.
///
/// Proportion 0 points straight up, 0.25 points right, 0.5 points down.
/// This is the shared convention for clock hands, month ticks, and weekday
/// dots.
pub fn proportion_to_angle(proportion: f64) -> f64 {
    (proportion - QUARTER_TURN) * TAU
}

/// Normalize an angle into `[0, TAU)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}
