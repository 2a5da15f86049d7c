//! The body model: every drawable element of the chart
//!
//! A [`Body`] is a tagged union with one variant per drawable kind. Each
//! variant is immutable once constructed from a resolved timestamp and knows
//! how to turn itself into primitives given the canvas dimensions and a
//! style; nothing here touches a sink, so the whole model is testable as pure
//! data. Under valid inputs (finite timestamp, positive canvas width) no
//! draw can fail.

use crate::canvas::{CanvasDimensions, Primitive};
use crate::clock::{days_before_month, days_in_year};
use crate::constants::{
    MONTH_TICK_LENGTH_PX, MONTH_TICK_ORBIT, MONTH_TICK_STROKE_WIDTH, ORBIT_RING_STROKE_WIDTH,
    WEEKDAY_DOT_FRACTION,
};
use crate::ephemeris::Planet;
use crate::geometry::{polar_to_cartesian, proportion_to_angle};
use crate::radius::{orbit_radius, planet_pixel_radius, sun_pixel_radius, DEFAULT_MARKER_SCALING};
use crate::style::Style;

/// An unfilled circle marking one orbit
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRing {
    pub orbit_index: f64,
}

/// A filled circle for a planet, placed on its ring at a resolved longitude
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetMarker {
    pub planet: Planet,
    /// Ecliptic longitude in radians, resolved from the ephemeris provider
    pub longitude_rad: f64,
    /// Calibration offset added to the longitude at draw time
    pub calibration_rad: f64,
}

/// The sun, fixed at the canvas center
#[derive(Debug, Clone, PartialEq)]
pub struct SunMarker;

/// A radial line from the center out to a ring
#[derive(Debug, Clone, PartialEq)]
pub struct ClockHand {
    pub orbit_index: f64,
    /// Fraction of the hand's cycle in `[0, 1)`; 0 points straight up
    pub proportion: f64,
    pub stroke_width: f64,
}

/// A short radial tick marking where a calendar month begins within the year
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTick {
    pub year: i32,
    /// Calendar month, 1..=12
    pub month: u32,
}

/// A small filled dot on a ring, one per elapsed weekday
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayMarker {
    pub orbit_index: f64,
    pub angle_rad: f64,
}

/// Every drawable element of the chart
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    OrbitRing(OrbitRing),
    Planet(PlanetMarker),
    Sun(SunMarker),
    ClockHand(ClockHand),
    MonthTick(MonthTick),
    WeekdayMarker(WeekdayMarker),
}

impl Body {
    /// Orbit ring index this body sits on (0 for the center)
    pub fn orbit_index(&self) -> f64 {
        match self {
            Body::OrbitRing(ring) => ring.orbit_index,
            Body::Planet(marker) => marker.planet.orbit_index(),
            Body::Sun(_) => 0.0,
            Body::ClockHand(hand) => hand.orbit_index,
            Body::MonthTick(_) => MONTH_TICK_ORBIT,
            Body::WeekdayMarker(marker) => marker.orbit_index,
        }
    }

    /// Compute this body's primitives for the given canvas and style
    pub fn draw(&self, canvas: CanvasDimensions, style: &Style) -> Vec<Primitive> {
        let width = canvas.width();
        let center = canvas.center();
        match self {
            Body::OrbitRing(ring) => vec![Primitive::Circle {
                center,
                radius: orbit_radius(ring.orbit_index, width),
                fill: None,
                stroke: Some(style.orbit_stroke.clone()),
                stroke_width: ORBIT_RING_STROKE_WIDTH,
            }],

            Body::Planet(marker) => {
                let ring_radius = orbit_radius(marker.planet.orbit_index(), width);
                let angle = marker.longitude_rad + marker.calibration_rad;
                vec![Primitive::Circle {
                    center: polar_to_cartesian(center, ring_radius, angle),
                    radius: planet_pixel_radius(
                        marker.planet.physical_radius_km(),
                        width,
                        DEFAULT_MARKER_SCALING,
                    ),
                    fill: Some(style.planet_fill.clone()),
                    stroke: None,
                    stroke_width: 0.0,
                }]
            }

            Body::Sun(_) => vec![Primitive::Circle {
                center,
                radius: sun_pixel_radius(width),
                fill: Some(style.planet_fill.clone()),
                stroke: None,
                stroke_width: 0.0,
            }],

            Body::ClockHand(hand) => {
                let angle = proportion_to_angle(hand.proportion);
                let tip_radius = orbit_radius(hand.orbit_index, width);
                vec![Primitive::Line {
                    start: center,
                    end: polar_to_cartesian(center, tip_radius, angle),
                    stroke: style.clock_stroke.clone(),
                    stroke_width: hand.stroke_width,
                }]
            }

            Body::MonthTick(tick) => {
                let proportion =
                    f64::from(days_before_month(tick.year, tick.month)) / f64::from(days_in_year(tick.year));
                let angle = proportion_to_angle(proportion);
                let ring_radius = orbit_radius(MONTH_TICK_ORBIT, width);
                vec![Primitive::Line {
                    start: polar_to_cartesian(center, ring_radius, angle),
                    end: polar_to_cartesian(center, ring_radius + MONTH_TICK_LENGTH_PX, angle),
                    stroke: style.month_marker_stroke.clone(),
                    stroke_width: MONTH_TICK_STROKE_WIDTH,
                }]
            }

            Body::WeekdayMarker(marker) => {
                let ring_radius = orbit_radius(marker.orbit_index, width);
                vec![Primitive::Circle {
                    center: polar_to_cartesian(center, ring_radius, marker.angle_rad),
                    radius: width * WEEKDAY_DOT_FRACTION,
                    fill: Some(style.clock_stroke.clone()),
                    stroke: None,
                    stroke_width: 0.0,
                }]
            }
        }
    }
}
