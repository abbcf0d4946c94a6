//! Face engine
//!
//! Owns the render state, the redraw scheduler and the composer, and wires
//! them to the host through the [`Clock`], [`WakeTimer`] and
//! [`DiagnosticSink`] seams. Every host callback lands on one of the
//! `on_*` handlers, which return whether the host should invalidate the
//! face.

use core::ops::BitOrAssign;

use embassy_sync::blocking_mutex::raw::RawMutex;
use sunface_protocol::TapType;

use crate::compose::{Bounds, Frame, FrameComposer};
use crate::config::FaceConfig;
use crate::mailbox::Mailbox;
use crate::scheduler::{self, RedrawScheduler, Reschedule, SessionId, WakeOutcome, WakeTicket};
use crate::state::{FaceEvent, RenderState};
use crate::time::{AbbreviatedDate, DateFormatter};
use crate::traits::{Clock, Diagnostic, DiagnosticSink, DrawSurface, WakeTimer};
use crate::weather;

/// Whether the host should invalidate the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    #[default]
    No,
    Yes,
}

impl Redraw {
    /// Check if a redraw was requested
    pub fn is_requested(&self) -> bool {
        matches!(self, Redraw::Yes)
    }
}

impl From<bool> for Redraw {
    fn from(requested: bool) -> Self {
        if requested {
            Redraw::Yes
        } else {
            Redraw::No
        }
    }
}

impl BitOrAssign for Redraw {
    fn bitor_assign(&mut self, rhs: Self) {
        if rhs.is_requested() {
            *self = Redraw::Yes;
        }
    }
}

/// Watch face engine for one session
pub struct FaceEngine<C, T, S, F = AbbreviatedDate> {
    config: FaceConfig,
    state: RenderState,
    scheduler: RedrawScheduler,
    composer: FrameComposer<F>,
    session: SessionId,
    clock: C,
    timer: T,
    sink: S,
    torn_down: bool,
}

impl<C, T, S> FaceEngine<C, T, S, AbbreviatedDate>
where
    C: Clock,
    T: WakeTimer,
    S: DiagnosticSink,
{
    /// Create the engine and begin its session
    ///
    /// The face starts hidden and interactive in the system time zone, with
    /// no forecast and square sizing.
    pub fn create(config: FaceConfig, session: SessionId, clock: C, timer: T, sink: S) -> Self {
        Self::create_with_date_format(config, session, clock, timer, sink, AbbreviatedDate)
    }
}

impl<C, T, S, F> FaceEngine<C, T, S, F>
where
    C: Clock,
    T: WakeTimer,
    S: DiagnosticSink,
    F: DateFormatter,
{
    /// Create the engine with a host-supplied date format
    pub fn create_with_date_format(
        config: FaceConfig,
        session: SessionId,
        clock: C,
        mut timer: T,
        mut sink: S,
        date_format: F,
    ) -> Self {
        let mut scheduler = RedrawScheduler::new();
        if let Some(leftover) = scheduler.begin(session) {
            timer.cancel(leftover);
        }
        sink.emit(Diagnostic::SessionStarted(session));

        let state = RenderState {
            sizing: config.square,
            ..RenderState::new(clock.system_time_zone())
        };

        Self {
            composer: FrameComposer::with_date_format(&config, date_format),
            config,
            state,
            scheduler,
            session,
            clock,
            timer,
            sink,
            torn_down: false,
        }
    }

    // ===== Host lifecycle =====

    /// Face became visible or hidden
    ///
    /// Becoming visible re-reads the system time zone, which may have
    /// changed while the face was hidden.
    pub fn on_visibility_changed(&mut self, visible: bool) -> Redraw {
        let zone = self.clock.system_time_zone();
        self.apply(FaceEvent::VisibilityChanged { visible, zone })
    }

    /// Host entered or left ambient mode
    pub fn on_ambient_mode_changed(&mut self, ambient: bool) -> Redraw {
        self.apply(FaceEvent::AmbientModeChanged(ambient))
    }

    /// Display capability flags
    pub fn on_properties_changed(&mut self, low_bit_ambient: bool) -> Redraw {
        self.apply(FaceEvent::PropertiesChanged { low_bit_ambient })
    }

    /// Display shape is known
    pub fn on_apply_shape(&mut self, round: bool) -> Redraw {
        let sizing = self.config.sizing_for(round);
        self.apply(FaceEvent::ShapeApplied { round, sizing })
    }

    /// Minute tick from the host
    pub fn on_time_tick(&mut self) -> Redraw {
        self.apply(FaceEvent::TimeTick)
    }

    /// Tap command with its raw host code
    pub fn on_tap(&mut self, tap_code: i32) -> Redraw {
        self.apply(FaceEvent::Tap(TapType::from_code(tap_code)))
    }

    /// System time zone changed
    ///
    /// Re-reads the zone from the clock rather than trusting the broadcast.
    pub fn on_time_zone_changed(&mut self) -> Redraw {
        let zone = self.clock.system_time_zone();
        self.apply(FaceEvent::TimeZoneChanged(zone))
    }

    // ===== Companion messages =====

    /// Handle one companion message
    ///
    /// Invalid messages are reported to the sink and otherwise ignored.
    pub fn on_message(&mut self, path: &str, payload: &[u8]) -> Redraw {
        if self.torn_down {
            return Redraw::No;
        }

        self.sink.emit(Diagnostic::MessageReceived {
            path,
            len: payload.len(),
        });

        match weather::parse(path, payload) {
            Ok(snapshot) => {
                self.sink.emit(Diagnostic::WeatherApplied {
                    icon: snapshot.icon(),
                    min_temp_c: snapshot.min_temp_c(),
                    max_temp_c: snapshot.max_temp_c(),
                });
                self.apply(FaceEvent::WeatherUpdated(snapshot))
            }
            Err(err) => {
                self.sink.emit(Diagnostic::MessageRejected(err));
                Redraw::No
            }
        }
    }

    /// Apply every queued message, oldest first
    pub fn drain<M: RawMutex, const N: usize>(&mut self, mailbox: &Mailbox<M, N>) -> Redraw {
        let mut redraw = Redraw::No;
        while let Some(envelope) = mailbox.try_take() {
            redraw |= self.on_message(envelope.path(), envelope.payload());
        }
        redraw
    }

    // ===== Timer =====

    /// Host timer delivered a wake
    ///
    /// Returns `Redraw::Yes` when a frame should be drawn now. Stale
    /// tickets are ignored.
    pub fn on_wake(&mut self, ticket: WakeTicket) -> Redraw {
        let now_ms = self.clock.now_ms();
        match self.scheduler.on_wake(ticket, self.timer_should_run(), now_ms) {
            WakeOutcome::Stale => {
                self.sink.emit(Diagnostic::StaleWake);
                Redraw::No
            }
            WakeOutcome::Fired { rearm } => {
                self.apply_reschedule(Reschedule {
                    cancelled: None,
                    armed: rearm,
                });
                Redraw::Yes
            }
        }
    }

    // ===== Drawing =====

    /// Compose a frame for the current time
    pub fn compose(&self, bounds: Bounds) -> Frame {
        self.composer.compose(&self.state, bounds, self.clock.now_ms())
    }

    /// Compose a frame and draw it on `surface`
    pub fn draw<D: DrawSurface + ?Sized>(
        &self,
        surface: &mut D,
        bounds: Bounds,
    ) -> Result<(), D::Error> {
        self.compose(bounds).render(surface)
    }

    /// End the session
    ///
    /// Cancels the pending wake. Afterwards every handler does nothing and
    /// every wake is stale.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }

        if let Some(ticket) = self.scheduler.end() {
            self.timer.cancel(ticket);
            self.sink.emit(Diagnostic::TimerCancelled);
        }
        self.torn_down = true;
        self.sink.emit(Diagnostic::SessionEnded(self.session));
    }

    // ===== Accessors =====

    /// Current render state
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Wake currently armed on the host timer
    pub fn pending_wake(&self) -> Option<WakeTicket> {
        self.scheduler.pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ===== Internals =====

    fn apply(&mut self, event: FaceEvent) -> Redraw {
        if self.torn_down {
            return Redraw::No;
        }

        let transition = self.state.transition(&event);
        self.state = transition.next;

        if transition.timer_affecting {
            let now_ms = self.clock.now_ms();
            let reschedule = self.scheduler.reevaluate(self.timer_should_run(), now_ms);
            self.apply_reschedule(reschedule);
        }

        Redraw::from(transition.redraw)
    }

    fn timer_should_run(&self) -> bool {
        scheduler::should_run(self.state.visible, self.state.ambient)
    }

    fn apply_reschedule(&mut self, reschedule: Reschedule) {
        if let Some(ticket) = reschedule.cancelled {
            self.timer.cancel(ticket);
            self.sink.emit(Diagnostic::TimerCancelled);
        }
        if let Some(armed) = reschedule.armed {
            self.timer.arm(armed.ticket, armed.delay_ms);
            self.sink.emit(Diagnostic::TimerArmed {
                delay_ms: armed.delay_ms,
            });
        }
    }
}
