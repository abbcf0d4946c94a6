//! Latest known forecast

use sunface_protocol::WeatherReport;

use super::icon::{classify, IconCategory};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Forecast shown on the face
///
/// A snapshot is never edited in place: every accepted update replaces the
/// whole value. The default value is unset, which hides the weather block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherSnapshot {
    icon: Option<IconCategory>,
    min_temp_c: i32,
    max_temp_c: i32,
    present: bool,
}

impl WeatherSnapshot {
    /// No forecast received yet
    pub const fn unset() -> Self {
        Self {
            icon: None,
            min_temp_c: 0,
            max_temp_c: 0,
            present: false,
        }
    }

    /// Create a present snapshot
    pub const fn new(icon: Option<IconCategory>, min_temp_c: i32, max_temp_c: i32) -> Self {
        Self {
            icon,
            min_temp_c,
            max_temp_c,
            present: true,
        }
    }

    /// Build a snapshot from a decoded report
    ///
    /// Temperatures are truncated toward zero. An unknown condition code
    /// leaves the icon empty but keeps the temperatures.
    pub fn from_report(report: &WeatherReport) -> Self {
        Self::new(
            classify(report.condition_code),
            truncate_celsius(report.min_temp_c),
            truncate_celsius(report.max_temp_c),
        )
    }

    /// Whether a forecast has been received
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Icon for the forecast condition, if the code was recognized
    pub fn icon(&self) -> Option<IconCategory> {
        self.icon
    }

    /// Forecast low in whole °C
    pub fn min_temp_c(&self) -> i32 {
        self.min_temp_c
    }

    /// Forecast high in whole °C
    pub fn max_temp_c(&self) -> i32 {
        self.max_temp_c
    }
}

// `as` saturates at the i32 bounds
fn truncate_celsius(value: f64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let snapshot = WeatherSnapshot::default();
        assert!(!snapshot.is_present());
        assert_eq!(snapshot, WeatherSnapshot::unset());
        assert_eq!(snapshot.icon(), None);
    }

    #[test]
    fn test_from_report_truncates() {
        let report = WeatherReport {
            condition_code: 500,
            min_temp_c: -3.9,
            max_temp_c: 12.99,
        };
        let snapshot = WeatherSnapshot::from_report(&report);
        assert!(snapshot.is_present());
        assert_eq!(snapshot.icon(), Some(IconCategory::Rain));
        assert_eq!(snapshot.min_temp_c(), -3);
        assert_eq!(snapshot.max_temp_c(), 12);
    }

    #[test]
    fn test_unknown_code_keeps_temperatures() {
        let report = WeatherReport {
            condition_code: 999,
            min_temp_c: 1.0,
            max_temp_c: 9.5,
        };
        let snapshot = WeatherSnapshot::from_report(&report);
        assert!(snapshot.is_present());
        assert_eq!(snapshot.icon(), None);
        assert_eq!(snapshot.min_temp_c(), 1);
        assert_eq!(snapshot.max_temp_c(), 9);
    }

    #[test]
    fn test_extreme_temperatures_saturate() {
        let report = WeatherReport {
            condition_code: 800,
            min_temp_c: -1.0e12,
            max_temp_c: 1.0e12,
        };
        let snapshot = WeatherSnapshot::from_report(&report);
        assert_eq!(snapshot.min_temp_c(), i32::MIN);
        assert_eq!(snapshot.max_temp_c(), i32::MAX);
    }
}
