//! Clock sub-layout: hands, month ticks, and weekday markers
//!
//! The clock face shares the chart's angular convention (proportion 0 is
//! straight up) and contributes its constituent bodies into the scene's flat
//! ordered list; there is no separate render step.
//!
//! Weekday markers mirror the minute hand: every marker sits at the minute
//! hand's angle, stepping outward one ring per elapsed weekday. This coupling
//! is a deliberate visual choice in the original artwork, not an
//! approximation, and is preserved exactly.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};

use crate::bodies::{Body, ClockHand, MonthTick, WeekdayMarker};
use crate::constants::{
    HOUR_HAND_ORBIT, HOUR_HAND_STROKE_WIDTH, MINUTE_HAND_ORBIT, MINUTE_HAND_STROKE_WIDTH,
    WEEKDAY_FIRST_ORBIT,
};
use crate::geometry::proportion_to_angle;

/// Days in a year under the proleptic Gregorian calendar (366 in leap years)
pub fn days_in_year(year: i32) -> u32 {
    // Last day of December carries the ordinal count for the whole year.
    NaiveDate::from_ymd_opt(year, 12, 31)
        .map(|d| d.ordinal())
        .unwrap_or(365)
}

/// Days elapsed before the first of `month` within `year`
pub fn days_before_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.ordinal0())
        .unwrap_or(0)
}

/// Build the clock face bodies for a resolved local timestamp.
///
/// Produces, in order: the hour hand (orbit 6), the minute hand (orbit 9),
/// twelve month ticks for the timestamp's year, and `weekday + 1` weekday
/// markers where Monday is weekday 0.
pub fn clock_bodies(at: DateTime<FixedOffset>) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(2 + 12 + 7);

    let hour_proportion = f64::from(at.hour() % 12) / 12.0;
    let minute_proportion = f64::from(at.minute()) / 60.0;

    bodies.push(Body::ClockHand(ClockHand {
        orbit_index: HOUR_HAND_ORBIT,
        proportion: hour_proportion,
        stroke_width: HOUR_HAND_STROKE_WIDTH,
    }));
    bodies.push(Body::ClockHand(ClockHand {
        orbit_index: MINUTE_HAND_ORBIT,
        proportion: minute_proportion,
        stroke_width: MINUTE_HAND_STROKE_WIDTH,
    }));

    // Always all twelve months, regardless of the timestamp's own month.
    for month in 1..=12 {
        bodies.push(Body::MonthTick(MonthTick {
            year: at.year(),
            month,
        }));
    }

    let weekday_ordinal = at.weekday().num_days_from_monday();
    let minute_angle = proportion_to_angle(minute_proportion);
    for step in 0..=weekday_ordinal {
        bodies.push(Body::WeekdayMarker(WeekdayMarker {
            orbit_index: WEEKDAY_FIRST_ORBIT + f64::from(step),
            angle_rad: minute_angle,
        }));
    }

    bodies
}
