#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use geoclaim_gate::ClaimGate;
use geoclaim_types::{ClaimErrorKind, ClaimTarget, Coordinate, Radius, TargetId};

#[derive(Debug, Arbitrary)]
struct Input {
    claimant_lat: f64,
    claimant_lng: f64,
    target_lat: f64,
    target_lng: f64,
    radius_km: f64,
}

fuzz_target!(|input: Input| {
    let Ok(radius) = Radius::from_km(input.radius_km) else {
        return;
    };
    let claimant = Coordinate {
        latitude: input.claimant_lat,
        longitude: input.claimant_lng,
    };
    let target = ClaimTarget::new(
        TargetId::new("fuzz"),
        Coordinate {
            latitude: input.target_lat,
            longitude: input.target_lng,
        },
        radius,
    );

    let verdict = ClaimGate.evaluate(&claimant, &target);

    // Fail closed: any invalid coordinate must never be eligible.
    if !claimant.is_valid() || !target.position.is_valid() {
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, Some(ClaimErrorKind::InvalidCoordinate));
    } else {
        assert!(verdict.distance_km.is_finite());
        assert!(verdict.distance_km >= 0.0);
        assert_eq!(verdict.eligible, verdict.distance_km <= radius.km());
    }
});
