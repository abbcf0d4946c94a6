//! Property tests for weather payload decoding.

use proptest::prelude::*;
use sunface_protocol::{Envelope, ParseError, WeatherReport, WEATHER_PATH};

proptest! {
    #[test]
    fn decode_never_panics(payload in proptest::collection::vec(any::<u8>(), 0..96)) {
        let _ = WeatherReport::decode(WEATHER_PATH, &payload);
    }

    #[test]
    fn other_paths_always_rejected(path in "[a-z/]{0,16}", payload in ".{0,32}") {
        prop_assume!(path != WEATHER_PATH);
        prop_assert_eq!(
            WeatherReport::decode(&path, payload.as_bytes()),
            Err(ParseError::WrongPath)
        );
    }

    #[test]
    fn well_formed_payloads_decode(
        code in -1000i32..2000,
        min in -60i32..60,
        max in -60i32..60,
        frac in 0u8..100,
    ) {
        let text = format!("{};{}.{:02};{}", code, min, frac, max);

        let report = WeatherReport::decode(WEATHER_PATH, text.as_bytes()).unwrap();
        prop_assert_eq!(report.condition_code, code);
        prop_assert_eq!(report.max_temp_c, max as f64);
        prop_assert_eq!(report.min_temp_c.trunc(), min as f64);
    }

    #[test]
    fn two_field_payloads_are_malformed(code in 0i32..1000, temp in -60i32..60) {
        let text = format!("{};{}", code, temp);
        prop_assert_eq!(
            WeatherReport::decode(WEATHER_PATH, text.as_bytes()),
            Err(ParseError::MalformedPayload)
        );
    }
}

#[test]
fn envelope_round_trips_through_decode() {
    let envelope = Envelope::new(WEATHER_PATH, b"300;7.9;15.1").unwrap();
    let report = WeatherReport::decode(envelope.path(), envelope.payload()).unwrap();
    assert_eq!(report.condition_code, 300);
    assert_eq!(report.min_temp_c, 7.9);
    assert_eq!(report.max_temp_c, 15.1);
}
