//! Radius functions: orbit-index and physical-size to pixel-radius mappings
//!
//! Orbit rings are spaced affinely from 50 px out to half the canvas width.
//! Planet markers compress eight orders of magnitude of physical size down to
//! a bounded visual range with a root law; the law's parameters are a tuning
//! choice, not physics, and live in [`MarkerScaling`] so they can be adjusted
//! in one place.

use crate::constants::{FIRST_ORBIT_RADIUS_PX, ORBIT_COUNT, SUN_RADIUS_FRACTION};

/// Parameters of the root-law compression used for planet marker sizes.
///
/// A marker's pixel radius is `physical_radius_km^(1/root) * canvas_width *
/// scale`. With the default parameters the Jupiter/Mercury visual ratio is
/// about 1.96 despite a ~29x difference in physical radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerScaling {
    /// Root of the compression law (5th root by default)
    pub root: f64,
    /// Scale factor applied after compression, per pixel of canvas width
    pub scale: f64,
}

/// Default marker scaling tuned for a 500 px canvas
pub const DEFAULT_MARKER_SCALING: MarkerScaling = MarkerScaling {
    root: 5.0,
    scale: 0.0024,
};

/// Pixel radius of an orbit ring.
///
/// Index 0 is the canvas center (radius 0). Rings 1 through 8 interpolate
/// affinely from [`FIRST_ORBIT_RADIUS_PX`] to half the canvas width.
/// Fractional indices are valid and extrapolate linearly, so index 1.5 lands
/// halfway between the first and second rings and index 9 lands one spacing
/// beyond the outermost ring.
///
/// No clamping is applied: callers must keep `canvas_width` above
/// [`crate::constants::MIN_CANVAS_WIDTH_PX`] or the spacing goes degenerate.
pub fn orbit_radius(orbit_index: f64, canvas_width: f64) -> f64 {
    if orbit_index == 0.0 {
        return 0.0;
    }
    let spacing = (canvas_width / 2.0 - FIRST_ORBIT_RADIUS_PX) / ORBIT_COUNT as f64;
    FIRST_ORBIT_RADIUS_PX + spacing * (orbit_index - 1.0)
}

/// Pixel radius of a planet marker from its physical radius in kilometers.
pub fn planet_pixel_radius(
    physical_radius_km: f64,
    canvas_width: f64,
    scaling: MarkerScaling,
) -> f64 {
    physical_radius_km.powf(1.0 / scaling.root) * canvas_width * scaling.scale
}

/// Pixel radius of the sun marker, a fixed proportion of the canvas width.
pub fn sun_pixel_radius(canvas_width: f64) -> f64 {
    canvas_width * SUN_RADIUS_FRACTION
}
