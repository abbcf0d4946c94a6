//! Weather data pushed from the companion
//!
//! - [`classify`] maps a condition code to an icon
//! - [`WeatherSnapshot`] is the latest known forecast
//! - [`parse`] turns an inbound message into a snapshot

pub mod icon;
pub mod parser;
pub mod snapshot;

pub use icon::{classify, IconCategory};
pub use parser::parse;
pub use snapshot::WeatherSnapshot;
