//! Weather condition icon classification
//!
//! Condition codes follow the OpenWeatherMap grouping:
//! 2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere,
//! 800 clear, 80x clouds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Icon shown next to the forecast temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IconCategory {
    Storm,
    LightRain,
    Rain,
    Snow,
    Fog,
    Clear,
    LightClouds,
    Cloudy,
}

impl IconCategory {
    /// Every category, in display-resource order
    pub const ALL: [IconCategory; 8] = [
        IconCategory::Storm,
        IconCategory::LightRain,
        IconCategory::Rain,
        IconCategory::Snow,
        IconCategory::Fog,
        IconCategory::Clear,
        IconCategory::LightClouds,
        IconCategory::Cloudy,
    ];
}

/// Map a weather condition code to its icon
///
/// Ranges are inclusive and checked top to bottom; the first match wins.
/// Codes outside every range have no icon.
pub fn classify(code: i32) -> Option<IconCategory> {
    use IconCategory::*;

    match code {
        200..=232 => Some(Storm),
        300..=321 => Some(LightRain),
        500..=504 => Some(Rain),
        511 => Some(Snow),
        520..=531 => Some(Rain),
        600..=622 => Some(Snow),
        701..=761 => Some(Fog),
        // 761 (squalls) is listed with 781 as a storm, but the fog range
        // above has already claimed it
        781 => Some(Storm),
        800 => Some(Clear),
        801 => Some(LightClouds),
        802..=804 => Some(Cloudy),
        _ => None,
    }
}
