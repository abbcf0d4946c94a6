//! Tap gestures reported by the watch host

/// Tap gesture phases delivered with a tap command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapType {
    /// Finger went down on the screen
    Touch,
    /// Touch turned into another gesture or was cancelled
    TouchCancel,
    /// Tap gesture completed
    Tap,
}

// Host codes
const TAP_TYPE_TOUCH: i32 = 0;
const TAP_TYPE_TOUCH_CANCEL: i32 = 1;
const TAP_TYPE_TAP: i32 = 2;

impl TapType {
    /// Parse a tap type from its host code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            TAP_TYPE_TOUCH => Some(TapType::Touch),
            TAP_TYPE_TOUCH_CANCEL => Some(TapType::TouchCancel),
            TAP_TYPE_TAP => Some(TapType::Tap),
            _ => None,
        }
    }
}
