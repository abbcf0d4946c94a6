//! Companion-link protocol for the Sunface watch face
//!
//! The phone-side companion app pushes short text messages to the watch over
//! a proximity messaging channel. Each message carries a path and a byte
//! payload. Only one path is understood today:
//!
//! ```text
//! path:    /weather
//! payload: <conditionCode:int>;<minTempC:decimal>;<maxTempC:decimal>
//! ```
//!
//! This crate only decodes what arrives. Session negotiation with the
//! companion (connect, retry, node discovery) belongs to the platform.

#![no_std]
#![deny(unsafe_code)]

pub mod envelope;
pub mod tap;
pub mod weather;

pub use envelope::{Envelope, EnvelopeError, MAX_PATH_LEN, MAX_PAYLOAD_LEN};
pub use tap::TapType;
pub use weather::{ParseError, WeatherReport, FIELD_SEPARATOR, WEATHER_PATH};
