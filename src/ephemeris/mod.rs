//! Ephemeris provider: per-body longitudes at a point in time
//!
//! The layout engine only ever asks one question of an ephemeris: "where is
//! this body, as an ecliptic longitude in radians, at this timestamp?" The
//! [`EphemerisProvider`] trait captures exactly that seam, and
//! [`KeplerEphemeris`] is the built-in answer: a two-body Kepler solution
//! over J2000 osculating elements, planar (inclinations ignored), which is
//! far more accuracy than a stylized chart needs.
//!
//! One quirk is load-bearing: querying [`Planet::Sun`] returns the Sun's
//! *apparent geocentric* longitude (Earth's heliocentric longitude plus pi).
//! The scene composer uses that value as the stand-in for Earth's marker,
//! matching the original artwork.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

use crate::constants::{DAY_S, DEG2RAD, J2000, JD_UNIX_EPOCH, TAU};
use crate::geometry::normalize_angle;

/// Error type for ephemeris lookups
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("Body not supported: {0}")]
    UnsupportedBody(String),

    #[error("Timestamp out of range: {0}")]
    TimeOutOfRange(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}

/// The bodies the chart knows about
///
/// The eight planets map onto orbit rings 1 through 8; the Sun sits at the
/// center and doubles as the lookup target for Earth's geocentric stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Orbit ring index of the body (0 for the Sun at the center)
    pub fn orbit_index(&self) -> f64 {
        match self {
            Planet::Sun => 0.0,
            Planet::Mercury => 1.0,
            Planet::Venus => 2.0,
            Planet::Earth => 3.0,
            Planet::Mars => 4.0,
            Planet::Jupiter => 5.0,
            Planet::Saturn => 6.0,
            Planet::Uranus => 7.0,
            Planet::Neptune => 8.0,
        }
    }

    /// Mean physical radius in kilometers
    pub fn physical_radius_km(&self) -> f64 {
        match self {
            Planet::Sun => 695_700.0,
            Planet::Mercury => 2_439.7,
            Planet::Venus => 6_051.8,
            Planet::Earth => 6_371.0,
            Planet::Mars => 3_389.5,
            Planet::Jupiter => 69_911.0,
            Planet::Saturn => 58_232.0,
            Planet::Uranus => 25_362.0,
            Planet::Neptune => 24_622.0,
        }
    }

    /// The eight planets, in orbit order
    pub fn all() -> [Planet; 8] {
        [
            Planet::Mercury,
            Planet::Venus,
            Planet::Earth,
            Planet::Mars,
            Planet::Jupiter,
            Planet::Saturn,
            Planet::Uranus,
            Planet::Neptune,
        ]
    }

    /// The inner planets (Mercury through Mars), in orbit order
    pub fn inner() -> [Planet; 4] {
        [Planet::Mercury, Planet::Venus, Planet::Earth, Planet::Mars]
    }
}

/// Source of per-body longitudes at a timestamp
///
/// Implementations must be deterministic: the same `(body, at)` pair always
/// yields the same longitude. For planets the result is the heliocentric
/// ecliptic longitude in radians; for [`Planet::Sun`] it is the apparent
/// geocentric solar longitude.
pub trait EphemerisProvider {
    fn longitude(
        &self,
        body: Planet,
        at: DateTime<FixedOffset>,
    ) -> std::result::Result<f64, EphemerisError>;
}

/// Osculating orbital elements at the J2000 epoch (planar subset)
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    /// Eccentricity
    e: f64,
    /// Longitude of the ascending node, radians
    big_omega: f64,
    /// Argument of periapsis, radians
    omega: f64,
    /// Mean anomaly at epoch, radians
    m0: f64,
    /// Mean motion, radians per day
    n: f64,
}

fn deg(value: f64) -> f64 {
    value * DEG2RAD
}

fn elements(e: f64, big_omega: f64, omega: f64, m0: f64, period_days: f64) -> OrbitalElements {
    OrbitalElements {
        e,
        big_omega: deg(big_omega),
        omega: deg(omega),
        m0: deg(m0),
        n: TAU / period_days,
    }
}

fn elements_for(planet: Planet) -> Option<OrbitalElements> {
    let el = match planet {
        Planet::Mercury => elements(0.2056, 48.3, 29.1, 174.8, 87.969),
        Planet::Venus => elements(0.0068, 76.7, 54.9, 50.4, 224.701),
        Planet::Earth => elements(0.0167, 0.0, 102.9, 357.5, 365.256),
        Planet::Mars => elements(0.0934, 49.6, 286.5, 19.4, 686.980),
        Planet::Jupiter => elements(0.0484, 100.6, 273.9, 20.0, 4332.589),
        Planet::Saturn => elements(0.0542, 113.7, 339.4, 317.0, 10759.22),
        Planet::Uranus => elements(0.0472, 74.0, 96.7, 142.2, 30685.4),
        Planet::Neptune => elements(0.0086, 131.8, 265.6, 256.2, 60189.0),
        Planet::Sun => return None,
    };
    Some(el)
}

/// Solve Kepler's equation M = E - e sin E for the eccentric anomaly
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..9 {
        let f = ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly;
        let fp = 1.0 - e * ecc_anomaly.cos();
        ecc_anomaly -= f / fp;
    }
    ecc_anomaly
}

/// Convert a timestamp to a Julian date
pub fn julian_date(at: DateTime<FixedOffset>) -> f64 {
    let unix_seconds =
        at.timestamp() as f64 + f64::from(at.timestamp_subsec_nanos()) / 1.0e9;
    JD_UNIX_EPOCH + unix_seconds / DAY_S
}

/// Built-in deterministic ephemeris over J2000 osculating elements
///
/// Accuracy is on the order of a degree over decades around J2000, which is
/// indistinguishable at chart scale.
#[derive(Debug, Default)]
pub struct KeplerEphemeris;

impl KeplerEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn heliocentric_longitude(el: OrbitalElements, days_since_epoch: f64) -> f64 {
        let mean_anomaly = normalize_angle(el.m0 + el.n * days_since_epoch);
        let ecc_anomaly = solve_kepler(mean_anomaly, el.e);

        let cos_e = ecc_anomaly.cos();
        let sin_e = ecc_anomaly.sin();
        let true_anomaly = ((1.0 - el.e * el.e).sqrt() * sin_e).atan2(cos_e - el.e);

        normalize_angle(el.big_omega + el.omega + true_anomaly)
    }
}

impl EphemerisProvider for KeplerEphemeris {
    fn longitude(
        &self,
        body: Planet,
        at: DateTime<FixedOffset>,
    ) -> std::result::Result<f64, EphemerisError> {
        let days = julian_date(at) - J2000;

        match body {
            Planet::Sun => {
                // Apparent geocentric solar longitude: opposite Earth's
                // heliocentric position.
                let earth = elements_for(Planet::Earth).ok_or_else(|| {
                    EphemerisError::UnsupportedBody(Planet::Earth.name().to_string())
                })?;
                Ok(normalize_angle(
                    Self::heliocentric_longitude(earth, days) + TAU / 2.0,
                ))
            }
            planet => {
                let el = elements_for(planet)
                    .ok_or_else(|| EphemerisError::UnsupportedBody(planet.name().to_string()))?;
                Ok(Self::heliocentric_longitude(el, days))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_julian_date_epochs() {
        // J2000.0 is 2000-01-01T12:00:00 TT; civil UTC noon is close enough
        // for the layout and exact for this arithmetic.
        assert_abs_diff_eq!(
            julian_date(at("2000-01-01T12:00:00Z")),
            J2000,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            julian_date(at("1970-01-01T00:00:00Z")),
            JD_UNIX_EPOCH,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_longitudes_are_normalized() {
        let eph = KeplerEphemeris::new();
        let t = at("2024-03-15T18:30:00Z");
        for planet in Planet::all() {
            let lon = eph.longitude(planet, t).unwrap();
            assert!((0.0..TAU).contains(&lon), "{}: {}", planet.name(), lon);
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let eph = KeplerEphemeris::new();
        let t = at("2024-03-15T18:30:00Z");
        for planet in Planet::all() {
            let a = eph.longitude(planet, t).unwrap();
            let b = eph.longitude(planet, t).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_sun_opposes_earth() {
        let eph = KeplerEphemeris::new();
        let t = at("2024-06-01T00:00:00Z");
        let earth = eph.longitude(Planet::Earth, t).unwrap();
        let sun = eph.longitude(Planet::Sun, t).unwrap();
        assert_abs_diff_eq!(
            normalize_angle(sun - earth),
            PI,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mercury_moves_between_dates() {
        // 31 days is roughly a third of Mercury's orbit; the longitude must
        // change by a clearly visible amount.
        let eph = KeplerEphemeris::new();
        let jan = eph.longitude(Planet::Mercury, at("2024-01-01T00:00:00Z")).unwrap();
        let feb = eph.longitude(Planet::Mercury, at("2024-02-01T00:00:00Z")).unwrap();
        let delta = normalize_angle(feb - jan);
        assert!(delta > 0.1 && delta < TAU - 0.1, "delta={delta}");
    }

    #[test]
    fn test_timezone_offset_is_honored() {
        // The same instant expressed in two zones must give the same result.
        let eph = KeplerEphemeris::new();
        let utc = eph.longitude(Planet::Mars, at("2024-03-15T18:30:00Z")).unwrap();
        let offset = eph
            .longitude(Planet::Mars, at("2024-03-15T13:30:00-05:00"))
            .unwrap();
        assert_eq!(utc.to_bits(), offset.to_bits());
    }

    #[test]
    fn test_planet_tables() {
        assert_eq!(Planet::all().len(), 8);
        assert_eq!(Planet::inner().len(), 4);
        assert_eq!(Planet::Mercury.orbit_index(), 1.0);
        assert_eq!(Planet::Neptune.orbit_index(), 8.0);
        assert_eq!(Planet::Sun.orbit_index(), 0.0);
        assert!(Planet::Jupiter.physical_radius_km() > Planet::Mercury.physical_radius_km());
    }
}
