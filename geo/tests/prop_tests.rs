use proptest::prelude::*;

use geoclaim_geo::{distance, distance_km, EARTH_RADIUS_KM};
use geoclaim_types::{Coordinate, DistanceUnit};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng).unwrap())
}

proptest! {
    /// A point is at distance zero from itself.
    #[test]
    fn identity(a in coordinate()) {
        prop_assert_eq!(distance_km(&a, &a), 0.0);
    }

    /// distance(a, b) == distance(b, a).
    #[test]
    fn symmetry(a in coordinate(), b in coordinate()) {
        let ab = distance_km(&a, &b);
        let ba = distance_km(&b, &a);
        prop_assert!((ab - ba).abs() <= 1e-9, "ab={} ba={}", ab, ba);
    }

    /// Results are non-negative and never exceed half the circumference.
    #[test]
    fn bounded(a in coordinate(), b in coordinate()) {
        let d = distance_km(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    /// Moving further north (longitude fixed) never shrinks the distance.
    #[test]
    fn monotonic_in_latitude(
        lat in -80.0f64..0.0,
        lng in -180.0f64..=180.0,
        step in 0.0f64..40.0,
        extra in 0.0f64..40.0,
    ) {
        let origin = Coordinate::new(lat, lng).unwrap();
        let near = Coordinate::new(lat + step, lng).unwrap();
        let far = Coordinate::new(lat + step + extra, lng).unwrap();
        prop_assert!(distance_km(&origin, &far) + 1e-9 >= distance_km(&origin, &near));
    }

    /// Widening the longitude gap (up to half a turn) never shrinks the distance.
    #[test]
    fn monotonic_in_longitude(
        lat in -89.0f64..=89.0,
        step in 0.0f64..90.0,
        extra in 0.0f64..90.0,
    ) {
        let origin = Coordinate::new(lat, 0.0).unwrap();
        let near = Coordinate::new(lat, step).unwrap();
        let far = Coordinate::new(lat, step + extra).unwrap();
        prop_assert!(distance_km(&origin, &far) + 1e-9 >= distance_km(&origin, &near));
    }

    /// Miles are kilometers divided by 1.60934.
    #[test]
    fn miles_consistent(a in coordinate(), b in coordinate()) {
        let km = distance(&a, &b, DistanceUnit::Kilometers);
        let mi = distance(&a, &b, DistanceUnit::Miles);
        prop_assert!((mi * 1.60934 - km).abs() <= 1e-6);
    }
}
