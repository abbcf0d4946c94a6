//! Weather update payload decoding
//!
//! The companion sends the current day's forecast as three `;`-separated
//! fields. The condition code follows the OpenWeatherMap numbering; the
//! temperatures are decimal degrees Celsius.

use heapless::Vec;

/// Path that weather updates are addressed to
pub const WEATHER_PATH: &str = "/weather";

/// Separator between payload fields
pub const FIELD_SEPARATOR: char = ';';

/// Number of fields in a weather payload
pub const WEATHER_FIELD_COUNT: usize = 3;

/// Reasons an inbound message is not a usable weather update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Message is addressed to some other path
    WrongPath,
    /// Payload is not text or does not have exactly three fields
    MalformedPayload,
    /// A field could not be parsed as a number
    InvalidField,
}

/// Decoded weather payload, before any classification
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReport {
    /// OpenWeatherMap condition code
    pub condition_code: i32,
    /// Forecast low (°C)
    pub min_temp_c: f64,
    /// Forecast high (°C)
    pub max_temp_c: f64,
}

impl WeatherReport {
    /// Decode a weather update from a message path and payload
    ///
    /// Trailing empty fields are dropped before the fields are counted, so a
    /// payload with a trailing separator (`"801;5;12;"`) is still accepted.
    /// The condition code must be a bare integer; temperatures may carry
    /// surrounding whitespace but must be finite.
    pub fn decode(path: &str, payload: &[u8]) -> Result<Self, ParseError> {
        if path != WEATHER_PATH {
            return Err(ParseError::WrongPath);
        }

        let text = core::str::from_utf8(payload).map_err(|_| ParseError::MalformedPayload)?;

        let mut fields = Vec::<&str, WEATHER_FIELD_COUNT>::new();
        for field in text.trim_end_matches(FIELD_SEPARATOR).split(FIELD_SEPARATOR) {
            fields
                .push(field)
                .map_err(|_| ParseError::MalformedPayload)?;
        }
        if fields.len() != WEATHER_FIELD_COUNT {
            return Err(ParseError::MalformedPayload);
        }

        let condition_code = fields[0]
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidField)?;

        Ok(Self {
            condition_code,
            min_temp_c: parse_temperature(fields[1])?,
            max_temp_c: parse_temperature(fields[2])?,
        })
    }
}

fn parse_temperature(field: &str) -> Result<f64, ParseError> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidField),
    }
}
