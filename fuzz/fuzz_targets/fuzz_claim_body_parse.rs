#![no_main]

use libfuzzer_sys::fuzz_target;

use geoclaim_rpc::handlers::ClaimRequestBody;
use geoclaim_types::ClaimRequest;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the request decoder.
    if let Ok(body) = serde_json::from_slice::<ClaimRequestBody>(data) {
        let request = ClaimRequest::from(body);
        let _ = request.position.is_valid();
    }
});
