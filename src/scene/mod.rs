//! Scene composer: builds the ordered body list and drives rendering
//!
//! Composition is a one-shot deterministic computation: resolve every
//! planet's longitude, build the immutable body list in a fixed back-to-front
//! order (orbit rings, then clock bodies, then planets, then the sun), and
//! emit primitives into a sink with the background disc first. Later entries
//! draw on top of earlier ones, so the order is a correctness requirement:
//! planets and the sun must never be occluded by rings or clock ticks.

use chrono::{DateTime, FixedOffset};

use crate::bodies::{Body, OrbitRing, PlanetMarker, SunMarker};
use crate::canvas::{CanvasDimensions, CanvasSink, Primitive};
use crate::clock::clock_bodies;
use crate::constants::{
    INNER_ORBIT_COUNT, LONGITUDE_CALIBRATION_RAD, MIN_CANVAS_WIDTH_PX, ORBIT_COUNT,
};
use crate::ephemeris::{EphemerisProvider, Planet};
use crate::style::Style;
use crate::{Result, TattooError};

/// Parameters of one render request
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Canvas width and height in pixels
    pub size: f64,
    /// Colors and feature toggles
    pub style: Style,
    /// Restrict the chart to Mercury through Mars
    pub inner_planets_only: bool,
    /// Offset added to every planet longitude before placement
    pub calibration_rad: f64,
}

impl SceneConfig {
    /// Create a config with the default calibration and the full planet set
    pub fn new(size: f64, style: Style) -> Self {
        Self {
            size,
            style,
            inner_planets_only: false,
            calibration_rad: LONGITUDE_CALIBRATION_RAD,
        }
    }

    /// Restrict the chart to the inner planets
    pub fn inner_planets_only(mut self, restrict: bool) -> Self {
        self.inner_planets_only = restrict;
        self
    }

    /// Override the longitude calibration offset
    pub fn calibration_rad(mut self, radians: f64) -> Self {
        self.calibration_rad = radians;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size <= MIN_CANVAS_WIDTH_PX {
            return Err(TattooError::ConfigError(format!(
                "canvas size must be a finite value above {} px, got {}",
                MIN_CANVAS_WIDTH_PX, self.size
            )));
        }
        Ok(())
    }
}

/// An immutable, fully resolved scene ready to render
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    canvas: CanvasDimensions,
    style: Style,
}

/// Build the ordered body list for one render request.
///
/// Performs one longitude lookup per planet. Earth's marker uses the Sun's
/// apparent geocentric longitude as a stand-in for Earth's heliocentric
/// position; this asymmetry comes from the original artwork and is
/// deliberate. Any lookup failure aborts the whole composition before a
/// single primitive exists, so partial scenes are impossible.
pub fn compose(
    provider: &dyn EphemerisProvider,
    at: DateTime<FixedOffset>,
    config: &SceneConfig,
) -> Result<Scene> {
    config.validate()?;

    let inner = Planet::inner();
    let all = Planet::all();
    let planets: &[Planet] = if config.inner_planets_only {
        &inner
    } else {
        &all
    };
    let ring_count = if config.inner_planets_only {
        INNER_ORBIT_COUNT
    } else {
        ORBIT_COUNT
    };

    // Resolve every longitude up front; markers are constructed only after
    // all lookups succeed.
    let mut markers = Vec::with_capacity(planets.len());
    for &planet in planets {
        let lookup_target = match planet {
            Planet::Earth => Planet::Sun,
            other => other,
        };
        let longitude_rad = provider.longitude(lookup_target, at)?;
        log::debug!(
            "{} longitude {:.6} rad (via {})",
            planet.name(),
            longitude_rad,
            lookup_target.name()
        );
        markers.push(Body::Planet(PlanetMarker {
            planet,
            longitude_rad,
            calibration_rad: config.calibration_rad,
        }));
    }

    let mut bodies = Vec::new();
    for index in 1..=ring_count {
        bodies.push(Body::OrbitRing(OrbitRing {
            orbit_index: index as f64,
        }));
    }
    if config.style.show_clock {
        bodies.extend(clock_bodies(at));
    }
    bodies.extend(markers);
    bodies.push(Body::Sun(SunMarker));

    log::debug!("composed scene with {} bodies", bodies.len());
    Ok(Scene {
        bodies,
        canvas: CanvasDimensions::new(config.size),
        style: config.style.clone(),
    })
}

impl Scene {
    /// The ordered body list, back to front
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Full-canvas filled disc drawn before everything else
    pub fn background_primitive(&self) -> Primitive {
        Primitive::Circle {
            center: self.canvas.center(),
            radius: self.canvas.width() / 2.0,
            fill: Some(self.style.background_fill.clone()),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// The complete primitive list in emission order, background first
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut primitives = vec![self.background_primitive()];
        for body in &self.bodies {
            primitives.extend(body.draw(self.canvas, &self.style));
        }
        primitives
    }

    /// Emit all primitives into a sink in back-to-front order
    pub fn render(&self, sink: &mut dyn CanvasSink) {
        for primitive in self.primitives() {
            sink.append(primitive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::KeplerEphemeris;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_canvas() {
        let eph = KeplerEphemeris::new();
        let t = at("2024-03-15T18:30:00Z");
        for bad in [0.0, -500.0, 100.0, f64::NAN, f64::INFINITY] {
            let config = SceneConfig::new(bad, Style::dark());
            assert!(
                compose(&eph, t, &config).is_err(),
                "size {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_earth_marker_uses_solar_longitude() {
        let eph = KeplerEphemeris::new();
        let t = at("2024-03-15T18:30:00Z");
        let scene = compose(&eph, t, &SceneConfig::new(500.0, Style::dark())).unwrap();

        let earth = scene
            .bodies()
            .iter()
            .find_map(|b| match b {
                Body::Planet(marker) if marker.planet == Planet::Earth => Some(marker),
                _ => None,
            })
            .expect("Earth marker present");

        use crate::ephemeris::EphemerisProvider;
        let solar = eph.longitude(Planet::Sun, t).unwrap();
        assert_eq!(earth.longitude_rad.to_bits(), solar.to_bits());
    }

    #[test]
    fn test_sun_is_last_body() {
        let eph = KeplerEphemeris::new();
        let scene = compose(
            &eph,
            at("2024-03-15T18:30:00Z"),
            &SceneConfig::new(500.0, Style::dark()),
        )
        .unwrap();
        assert!(matches!(scene.bodies().last(), Some(Body::Sun(_))));
    }

    #[test]
    fn test_background_is_full_canvas_disc() {
        let eph = KeplerEphemeris::new();
        let scene = compose(
            &eph,
            at("2024-03-15T18:30:00Z"),
            &SceneConfig::new(500.0, Style::dark()),
        )
        .unwrap();
        match scene.background_primitive() {
            Primitive::Circle { center, radius, fill, .. } => {
                assert_eq!(center.x, 250.0);
                assert_eq!(center.y, 250.0);
                assert_eq!(radius, 250.0);
                assert_eq!(fill, Some(Style::dark().background_fill));
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }
}
