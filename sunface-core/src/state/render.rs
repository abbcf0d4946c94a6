//! Render state definition
//!
//! The frame composer and the redraw scheduler only ever read this state.

use super::events::FaceEvent;
use crate::config::Sizing;
use crate::time::TimeZone;
use crate::weather::WeatherSnapshot;

/// State held by the face between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState {
    /// Host is in ambient (low power) mode
    pub ambient: bool,
    /// Display uses fewer bits per color in ambient mode
    pub low_bit_ambient: bool,
    /// Face is currently on screen
    pub visible: bool,
    /// Zone used to render the time and date
    pub time_zone: TimeZone,
    /// Latest forecast
    pub weather: WeatherSnapshot,
    /// Display is round
    pub display_round: bool,
    /// Text sizes for the current display shape
    pub sizing: Sizing,
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Complete state after the event
    pub next: RenderState,
    /// Whether the face should be redrawn
    pub redraw: bool,
    /// Whether the redraw timer must be re-evaluated
    pub timer_affecting: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}

impl RenderState {
    /// Initial state when the face is created
    ///
    /// The face starts hidden and interactive, with no forecast and square
    /// sizing until the host reports the display shape.
    pub fn new(time_zone: TimeZone) -> Self {
        Self {
            ambient: false,
            low_bit_ambient: false,
            visible: false,
            time_zone,
            weather: WeatherSnapshot::unset(),
            display_round: false,
            sizing: Sizing::SQUARE,
        }
    }

    /// Check if the face is in the interactive layout
    pub fn is_interactive(&self) -> bool {
        !self.ambient
    }

    /// Check if the weather block is drawn
    pub fn shows_weather(&self) -> bool {
        self.weather.is_present() && self.is_interactive()
    }

    /// Whether text is drawn with anti-aliasing
    ///
    /// Low-bit displays cannot show intermediate shades in ambient mode.
    pub fn text_anti_alias(&self) -> bool {
        !(self.ambient && self.low_bit_ambient)
    }

    /// Process an event and return the resulting transition
    ///
    /// This is the only way the render state changes.
    pub fn transition(&self, event: &FaceEvent) -> Transition {
        let mut next = *self;
        let mut redraw = false;

        match *event {
            FaceEvent::VisibilityChanged { visible, zone } => {
                next.visible = visible;
                if visible {
                    // Zone may have changed while hidden
                    next.time_zone = zone;
                    redraw = true;
                }
            }
            FaceEvent::AmbientModeChanged(ambient) => {
                if self.ambient != ambient {
                    next.ambient = ambient;
                    redraw = true;
                }
            }
            FaceEvent::PropertiesChanged { low_bit_ambient } => {
                next.low_bit_ambient = low_bit_ambient;
            }
            FaceEvent::ShapeApplied { round, sizing } => {
                next.display_round = round;
                next.sizing = sizing;
            }
            FaceEvent::TimeTick | FaceEvent::Tap(_) => {
                redraw = true;
            }
            FaceEvent::TimeZoneChanged(zone) => {
                next.time_zone = zone;
                redraw = true;
            }
            FaceEvent::WeatherUpdated(snapshot) => {
                next.weather = snapshot;
                redraw = true;
            }
        }

        Transition {
            next,
            redraw,
            timer_affecting: event.is_timer_affecting(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::IconCategory;
    use sunface_protocol::TapType;

    fn visible_interactive() -> RenderState {
        RenderState {
            visible: true,
            ..RenderState::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = RenderState::new(TimeZone::from_offset_minutes(120));
        assert!(!state.visible);
        assert!(!state.ambient);
        assert!(!state.weather.is_present());
        assert_eq!(state.sizing, Sizing::SQUARE);
        assert_eq!(state.time_zone.offset_secs(), 7200);
    }

    #[test]
    fn test_visibility_refreshes_zone() {
        let zone = TimeZone::from_offset_minutes(-300);
        let t = RenderState::default().transition(&FaceEvent::VisibilityChanged {
            visible: true,
            zone,
        });
        assert!(t.next.visible);
        assert_eq!(t.next.time_zone, zone);
        assert!(t.redraw);
        assert!(t.timer_affecting);
    }

    #[test]
    fn test_hidden_keeps_zone() {
        let state = visible_interactive();
        let t = state.transition(&FaceEvent::VisibilityChanged {
            visible: false,
            zone: TimeZone::from_offset_minutes(60),
        });
        assert!(!t.next.visible);
        assert_eq!(t.next.time_zone, TimeZone::UTC);
        assert!(!t.redraw);
        assert!(t.timer_affecting);
    }

    #[test]
    fn test_ambient_change_redraws_once() {
        let state = visible_interactive();
        let entered = state.transition(&FaceEvent::AmbientModeChanged(true));
        assert!(entered.next.ambient);
        assert!(entered.redraw);
        assert!(entered.timer_affecting);

        // Repeated notification is not a change
        let repeated = entered.next.transition(&FaceEvent::AmbientModeChanged(true));
        assert!(!repeated.redraw);
        assert!(repeated.timer_affecting);
        assert_eq!(repeated.next, entered.next);
    }

    #[test]
    fn test_anti_alias_follows_ambient() {
        let mut state = visible_interactive();
        state = state
            .transition(&FaceEvent::PropertiesChanged {
                low_bit_ambient: true,
            })
            .next;
        assert!(state.text_anti_alias());

        state = state.transition(&FaceEvent::AmbientModeChanged(true)).next;
        assert!(!state.text_anti_alias());

        state = state.transition(&FaceEvent::AmbientModeChanged(false)).next;
        assert!(state.text_anti_alias());
    }

    #[test]
    fn test_anti_alias_without_low_bit() {
        let state = visible_interactive()
            .transition(&FaceEvent::AmbientModeChanged(true))
            .next;
        assert!(state.text_anti_alias());
    }

    #[test]
    fn test_shape_applied() {
        let t = RenderState::default().transition(&FaceEvent::ShapeApplied {
            round: true,
            sizing: Sizing::ROUND,
        });
        assert!(t.next.display_round);
        assert_eq!(t.next.sizing, Sizing::ROUND);
        assert!(!t.redraw);
        assert!(!t.timer_affecting);
    }

    #[test]
    fn test_tick_and_tap_only_redraw() {
        let state = visible_interactive();
        for event in [
            FaceEvent::TimeTick,
            FaceEvent::Tap(Some(TapType::Tap)),
            FaceEvent::Tap(Some(TapType::TouchCancel)),
            FaceEvent::Tap(None),
        ] {
            let t = state.transition(&event);
            assert_eq!(t.next, state);
            assert!(t.redraw);
            assert!(!t.timer_affecting);
        }
    }

    #[test]
    fn test_weather_replaced_wholesale() {
        let first = WeatherSnapshot::new(Some(IconCategory::Rain), 3, 8);
        let second = WeatherSnapshot::new(None, -2, 1);

        let state = visible_interactive()
            .transition(&FaceEvent::WeatherUpdated(first))
            .next;
        assert_eq!(state.weather, first);
        assert!(state.shows_weather());

        let t = state.transition(&FaceEvent::WeatherUpdated(second));
        assert_eq!(t.next.weather, second);
        assert!(t.redraw);
    }

    #[test]
    fn test_weather_hidden_in_ambient() {
        let state = RenderState {
            ambient: true,
            weather: WeatherSnapshot::new(Some(IconCategory::Clear), 10, 20),
            ..visible_interactive()
        };
        assert!(!state.shows_weather());
        assert!(!state.is_interactive());
    }

    #[test]
    fn test_time_zone_changed() {
        let zone = TimeZone::from_offset_minutes(330);
        let t = visible_interactive().transition(&FaceEvent::TimeZoneChanged(zone));
        assert_eq!(t.next.time_zone, zone);
        assert!(t.redraw);
    }
}
