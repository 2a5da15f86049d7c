//! End-to-end composition tests: body counts, draw order, determinism

use chrono::{DateTime, FixedOffset};
use rstest::rstest;

use startattoo::bodies::Body;
use startattoo::canvas::{Primitive, PrimitiveBuffer};
use startattoo::ephemeris::KeplerEphemeris;
use startattoo::scene::{compose, SceneConfig};
use startattoo::style::Style;

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

fn style_with_clock(show_clock: bool) -> Style {
    let mut style = Style::dark();
    style.show_clock = show_clock;
    style
}

/// Rank of a body in the required back-to-front composition order
fn layer(body: &Body) -> u8 {
    match body {
        Body::OrbitRing(_) => 0,
        Body::ClockHand(_) | Body::MonthTick(_) | Body::WeekdayMarker(_) => 1,
        Body::Planet(_) => 2,
        Body::Sun(_) => 3,
    }
}

#[test]
fn full_scene_primitive_counts() {
    // 2024-03-15 is a Friday (weekday ordinal 4, Monday = 0): 5 weekday dots.
    let scene = compose(
        &KeplerEphemeris::new(),
        at("2024-03-15T18:30:00Z"),
        &SceneConfig::new(500.0, Style::dark()),
    )
    .unwrap();

    let bodies = scene.bodies();
    let count = |pred: fn(&Body) -> bool| bodies.iter().filter(|b| pred(b)).count();

    assert_eq!(count(|b| matches!(b, Body::OrbitRing(_))), 8);
    assert_eq!(count(|b| matches!(b, Body::ClockHand(_))), 2);
    assert_eq!(count(|b| matches!(b, Body::MonthTick(_))), 12);
    assert_eq!(count(|b| matches!(b, Body::WeekdayMarker(_))), 5);
    assert_eq!(count(|b| matches!(b, Body::Planet(_))), 8);
    assert_eq!(count(|b| matches!(b, Body::Sun(_))), 1);
    assert_eq!(bodies.len(), 36);

    // Each body currently emits exactly one primitive; plus the background.
    assert_eq!(scene.primitives().len(), 37);
}

#[test]
fn inner_planets_only_counts() {
    let config = SceneConfig::new(500.0, Style::dark()).inner_planets_only(true);
    let scene = compose(&KeplerEphemeris::new(), at("2024-03-15T18:30:00Z"), &config).unwrap();

    let bodies = scene.bodies();
    let rings = bodies.iter().filter(|b| matches!(b, Body::OrbitRing(_))).count();
    let planets: Vec<&str> = bodies
        .iter()
        .filter_map(|b| match b {
            Body::Planet(marker) => Some(marker.planet.name()),
            _ => None,
        })
        .collect();

    assert_eq!(rings, 4);
    assert_eq!(planets, vec!["Mercury", "Venus", "Earth", "Mars"]);
}

#[rstest]
#[case(false, false)]
#[case(false, true)]
#[case(true, false)]
#[case(true, true)]
fn draw_order_layers_are_monotonic(#[case] inner_only: bool, #[case] show_clock: bool) {
    let config = SceneConfig::new(500.0, style_with_clock(show_clock))
        .inner_planets_only(inner_only);
    let scene = compose(&KeplerEphemeris::new(), at("2024-03-15T18:30:00Z"), &config).unwrap();

    let layers: Vec<u8> = scene.bodies().iter().map(layer).collect();
    let mut sorted = layers.clone();
    sorted.sort_unstable();
    assert_eq!(
        layers, sorted,
        "bodies out of order (inner_only={inner_only}, show_clock={show_clock})"
    );

    // Planets and the sun must come strictly after every ring and clock body.
    let first_marker = layers.iter().position(|&l| l >= 2).unwrap();
    assert!(layers[..first_marker].iter().all(|&l| l < 2));
    assert!(layers[first_marker..].iter().all(|&l| l >= 2));
}

#[test]
fn clock_disabled_removes_clock_bodies() {
    let config = SceneConfig::new(500.0, style_with_clock(false));
    let scene = compose(&KeplerEphemeris::new(), at("2024-03-15T18:30:00Z"), &config).unwrap();
    assert!(scene.bodies().iter().all(|b| !matches!(
        b,
        Body::ClockHand(_) | Body::MonthTick(_) | Body::WeekdayMarker(_)
    )));
    // 8 rings + 8 planets + sun, plus the background primitive.
    assert_eq!(scene.primitives().len(), 18);
}

#[test]
fn identical_inputs_give_identical_primitives() {
    let eph = KeplerEphemeris::new();
    let t = at("2024-03-15T18:30:00Z");
    let config = SceneConfig::new(500.0, Style::dark());

    let first = compose(&eph, t, &config).unwrap().primitives();
    let second = compose(&eph, t, &config).unwrap().primitives();
    assert_eq!(first, second);
}

#[test]
fn render_emits_background_first() {
    let scene = compose(
        &KeplerEphemeris::new(),
        at("2024-03-15T18:30:00Z"),
        &SceneConfig::new(500.0, Style::dark()),
    )
    .unwrap();

    let mut buffer = PrimitiveBuffer::new();
    scene.render(&mut buffer);

    assert_eq!(buffer.primitives().len(), 37);
    match &buffer.primitives()[0] {
        Primitive::Circle { radius, fill, .. } => {
            assert_eq!(*radius, 250.0);
            assert_eq!(fill.as_ref(), Some(&Style::dark().background_fill));
        }
        other => panic!("expected background circle, got {:?}", other),
    }
}

#[test]
fn light_preset_composes_too() {
    let scene = compose(
        &KeplerEphemeris::new(),
        at("2023-11-05T07:15:00Z"),
        &SceneConfig::new(800.0, Style::light()),
    )
    .unwrap();
    // 2023-11-05 is a Sunday: all 7 weekday dots.
    let dots = scene
        .bodies()
        .iter()
        .filter(|b| matches!(b, Body::WeekdayMarker(_)))
        .count();
    assert_eq!(dots, 7);
}
