//! Behavioral properties of the public API.

use geocalc::distance::distance;
use geocalc::{
    decimal_to_sexagesimal, is_sexagesimal, round, sexagesimal_to_decimal, GeoContext, GeoError,
    Point, Unit,
};
use pretty_assertions::assert_eq;

/// A spread of points across hemispheres, poles and the antimeridian.
fn sample_points() -> Vec<Point> {
    [
        (51.503293, -0.1195),
        (52.2296756, 21.0122287),
        (52.406374, 16.9251681),
        (-33.8688, 151.2093),
        (35.6762, 139.6503),
        (40.7128, -74.006),
        (-22.9068, -43.1729),
        (0.0, 0.0),
        (90.0, 0.0),
        (-90.0, 180.0),
        (0.0, -180.0),
    ]
    .into_iter()
    .map(|(lat, lng)| Point::new(lat, lng).unwrap())
    .collect()
}

#[test]
fn distance_is_symmetric() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            assert_eq!(distance(a, b, 1), distance(b, a, 1), "a={a} b={b}");
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    for p in sample_points() {
        assert_eq!(distance(&p, &p, 1), 0, "p={p}");
    }
}

#[test]
fn distance_fixtures() {
    let ctx = GeoContext::default();
    assert_eq!(
        ctx.distance_from_components(51.503293, -0.119500, 51.503293, -0.119500, None)
            .unwrap(),
        0
    );

    let meters = ctx
        .distance_from_components(52.2296756, 21.0122287, 52.406374, 16.9251681, None)
        .unwrap();
    assert!(meters.abs_diff(279_352) <= 1_000, "got {meters}");
}

#[test]
fn accuracy_yields_multiples() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            assert_eq!(distance(a, b, 100) % 100, 0);
        }
    }
}

#[test]
fn string_and_component_forms_agree() {
    let ctx = GeoContext::default();
    let from_strings = ctx
        .distance_from_strings("52.2296756,21.0122287", "52.406374,16.9251681", Some(10))
        .unwrap();
    let from_components = ctx
        .distance_from_components("52.2296756", "21.0122287", 52.406374, 16.9251681, Some(10))
        .unwrap();
    assert_eq!(from_strings, from_components);
}

#[test]
fn convert_unit_fixtures() {
    let ctx = GeoContext::default();
    assert_eq!(ctx.convert_unit(Unit::Kilometers, Some(1000.0), None).unwrap(), 1.0);
    let miles = ctx.convert_unit(Unit::Miles, Some(1609.344), None).unwrap();
    assert!((miles - 1.0).abs() < 1e-4);
}

#[test]
fn convert_unit_needs_a_distance() {
    let ctx = GeoContext::default();
    assert_eq!(
        ctx.convert_unit(Unit::Kilometers, None, None),
        Err(GeoError::NoDistanceAvailable)
    );
}

#[test]
fn sexagesimal_detection() {
    assert!(is_sexagesimal("51° 30' 11.86\" N"));
    assert!(!is_sexagesimal("51.50329"));
}

#[test]
fn sexagesimal_roundtrip_non_negative() {
    let tolerance = 0.005 / 3600.0 + 1e-8;
    let mut x = 0.0;
    while x < 180.0 {
        let text = decimal_to_sexagesimal(x);
        let back = sexagesimal_to_decimal(&text).unwrap();
        assert!((back - x).abs() <= tolerance, "x={x} text={text} back={back}");
        x += 1.234567;
    }
}

#[test]
fn sexagesimal_roundtrip_negative_is_not_supported() {
    let text = decimal_to_sexagesimal(-51.5);
    assert_eq!(text, "-51° 30' 0.00\"");
    assert_eq!(
        sexagesimal_to_decimal(&text),
        Err(GeoError::InvalidSexagesimalFormat { input: text })
    );
}

#[test]
fn hemisphere_letter_sets_sign() {
    assert_eq!(sexagesimal_to_decimal("51° 30' 0\" S").unwrap(), -51.5);
    assert_eq!(sexagesimal_to_decimal("51° 30' 0\" W").unwrap(), -51.5);
    assert_eq!(sexagesimal_to_decimal("51° 30' 0\" N").unwrap(), 51.5);
    assert_eq!(sexagesimal_to_decimal("51° 30' 0\" E").unwrap(), 51.5);
}

#[test]
fn round_is_idempotent() {
    for v in [0.1 + 0.2, 1.0 / 7.0, 123.456789, -9.87654321, 1e6 / 3.0] {
        for n in [0, 1, 2, 4, 6] {
            assert_eq!(round(round(v, n), n), round(v, n));
        }
    }
}

#[test]
fn context_shared_across_threads() {
    let ctx = std::sync::Arc::new(GeoContext::new(100));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                let lat = format!("{}° 30' 0\" N", 10 + i);
                ctx.distance_from_components(lat.as_str(), 0.0, 0.0, 0.0, None)
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] < w[1]));
    assert!(ctx.last_distance().is_some());
}
