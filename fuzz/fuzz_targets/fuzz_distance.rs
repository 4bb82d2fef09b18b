#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use geoclaim_geo::{distance, distance_km, EARTH_RADIUS_KM};
use geoclaim_types::{Coordinate, DistanceUnit};

#[derive(Debug, Arbitrary)]
struct Input {
    a_lat: f64,
    a_lng: f64,
    b_lat: f64,
    b_lng: f64,
}

// Distance between any two in-range points is finite, non-negative,
// symmetric and no longer than half the Earth's circumference.
fuzz_target!(|input: Input| {
    let (Ok(a), Ok(b)) = (
        Coordinate::new(input.a_lat, input.a_lng),
        Coordinate::new(input.b_lat, input.b_lng),
    ) else {
        return;
    };

    let ab = distance_km(&a, &b);
    let ba = distance_km(&b, &a);

    assert!(ab.is_finite());
    assert!(ab >= 0.0);
    assert!((ab - ba).abs() <= 1e-9);
    assert!(ab <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    assert_eq!(distance_km(&a, &a), 0.0);

    let miles = distance(&a, &b, DistanceUnit::Miles);
    assert!((DistanceUnit::Miles.to_km(miles) - ab).abs() <= 1e-6);
});
