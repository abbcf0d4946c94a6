//! Events that drive render-state transitions

use sunface_protocol::TapType;

use crate::config::Sizing;
use crate::time::TimeZone;
use crate::weather::WeatherSnapshot;

/// Lifecycle and data events delivered to the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    // Host lifecycle
    /// Face became visible or hidden; `zone` is the system default at that moment
    VisibilityChanged { visible: bool, zone: TimeZone },
    /// Host entered or left ambient mode
    AmbientModeChanged(bool),
    /// Display capability flags reported by the host
    PropertiesChanged { low_bit_ambient: bool },
    /// Display shape is known; sizing already picked for it
    ShapeApplied { round: bool, sizing: Sizing },

    // Periodic and input
    /// Minute tick from the host (drives ambient redraws)
    TimeTick,
    /// Tap gesture phase, `None` for codes the host added later
    Tap(Option<TapType>),

    // Environment
    /// System time zone changed
    TimeZoneChanged(TimeZone),
    /// A valid weather update was parsed
    WeatherUpdated(WeatherSnapshot),
}

impl FaceEvent {
    /// Check if this event can change whether the redraw timer runs
    pub fn is_timer_affecting(&self) -> bool {
        matches!(
            self,
            FaceEvent::VisibilityChanged { .. } | FaceEvent::AmbientModeChanged(_)
        )
    }
}
