//! Inbound weather message parsing

use sunface_protocol::{ParseError, WeatherReport};

use super::snapshot::WeatherSnapshot;

/// Parse a companion message into a weather snapshot
///
/// Only messages addressed to `/weather` are eligible. Malformed
/// temperatures reject the whole message, an unrecognized condition code
/// does not. Committing the result is up to the caller.
pub fn parse(path: &str, payload: &[u8]) -> Result<WeatherSnapshot, ParseError> {
    WeatherReport::decode(path, payload).map(|report| WeatherSnapshot::from_report(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::IconCategory;

    #[test]
    fn test_parse_light_clouds() {
        let snapshot = parse("/weather", b"801;5;12").unwrap();
        assert_eq!(snapshot, WeatherSnapshot::new(Some(IconCategory::LightClouds), 5, 12));
        assert!(snapshot.is_present());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("/weather", b"801;5"), Err(ParseError::MalformedPayload));
        assert_eq!(parse("/other", b"801;5;12"), Err(ParseError::WrongPath));
        assert_eq!(parse("/weather", b"abc;5;12"), Err(ParseError::InvalidField));
    }

    #[test]
    fn test_parse_unknown_code() {
        let snapshot = parse("/weather", b"42;-1.5;3.5").unwrap();
        assert!(snapshot.is_present());
        assert_eq!(snapshot.icon(), None);
        assert_eq!(snapshot.min_temp_c(), -1);
        assert_eq!(snapshot.max_temp_c(), 3);
    }
}
