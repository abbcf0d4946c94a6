//! Once-per-second redraw scheduling
//!
//! The scheduler only decides when the next wake should happen. Arming and
//! cancelling the host timer is left to the caller, which applies the
//! returned [`Reschedule`] through a [`WakeTimer`](crate::traits::WakeTimer).

use crate::config::INTERACTIVE_UPDATE_RATE_MS;

/// Identifies one create/teardown cycle of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionId(u32);

impl SessionId {
    /// First session handed out by the host
    pub const fn first() -> Self {
        Self(1)
    }

    /// Session following this one
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw session number
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Handle for one armed wake
///
/// A ticket is only honoured while it is the pending wake of the active
/// session. Any other ticket is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WakeTicket {
    pub session: SessionId,
    pub generation: u32,
}

/// A wake to arm on the host timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArmedWake {
    pub ticket: WakeTicket,
    pub delay_ms: u64,
}

/// Timer changes produced by a re-evaluation
///
/// Apply `cancelled` before `armed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reschedule {
    /// Previously pending wake to cancel
    pub cancelled: Option<WakeTicket>,
    /// New wake to arm
    pub armed: Option<ArmedWake>,
}

impl Reschedule {
    /// No timer changes
    pub const fn none() -> Self {
        Self {
            cancelled: None,
            armed: None,
        }
    }

    /// Check if the host timer must be touched
    pub fn is_empty(&self) -> bool {
        self.cancelled.is_none() && self.armed.is_none()
    }
}

/// Result of a timer wake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeOutcome {
    /// Ticket was cancelled, superseded, or from an ended session
    Stale,
    /// Draw one frame, then arm `rearm` if present
    Fired { rearm: Option<ArmedWake> },
}

impl WakeOutcome {
    /// Check if the wake should produce a frame
    pub fn is_fired(&self) -> bool {
        matches!(self, WakeOutcome::Fired { .. })
    }
}

/// Whether the periodic timer runs
///
/// Ambient redraws come from the host minute tick instead.
pub fn should_run(visible: bool, ambient: bool) -> bool {
    visible && !ambient
}

/// Delay until the next whole second
///
/// Always in `1..=1000`; a time exactly on a boundary waits a full second.
pub fn next_wake_delay(now_ms: i64) -> u64 {
    let rate = INTERACTIVE_UPDATE_RATE_MS as i64;
    (rate - now_ms.rem_euclid(rate)) as u64
}

/// Tracks the single pending redraw wake
#[derive(Debug, Clone, Default)]
pub struct RedrawScheduler {
    /// Active session, `None` before `begin` and after `end`
    session: Option<SessionId>,
    /// Wake currently armed on the host timer
    pending: Option<WakeTicket>,
    /// Generation of the most recent ticket
    generation: u32,
}

impl RedrawScheduler {
    /// Create an idle scheduler with no session
    pub const fn new() -> Self {
        Self {
            session: None,
            pending: None,
            generation: 0,
        }
    }

    /// Start accepting wakes for a session
    ///
    /// Returns a wake left over from a previous session that must be
    /// cancelled.
    pub fn begin(&mut self, session: SessionId) -> Option<WakeTicket> {
        let leftover = self.pending.take();
        self.session = Some(session);
        self.generation = 0;
        leftover
    }

    /// Stop the session
    ///
    /// Returns the pending wake to cancel. Every ticket issued so far is
    /// stale from now on.
    pub fn end(&mut self) -> Option<WakeTicket> {
        self.session = None;
        self.pending.take()
    }

    /// Active session
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Wake currently armed
    pub fn pending(&self) -> Option<WakeTicket> {
        self.pending
    }

    /// Cancel the pending wake and arm a new one if the timer should run
    pub fn reevaluate(&mut self, should_run: bool, now_ms: i64) -> Reschedule {
        if self.session.is_none() {
            return Reschedule::none();
        }

        let cancelled = self.pending.take();
        let armed = if should_run { self.arm(now_ms) } else { None };

        Reschedule { cancelled, armed }
    }

    /// Handle a timer wake
    pub fn on_wake(&mut self, ticket: WakeTicket, should_run: bool, now_ms: i64) -> WakeOutcome {
        if self.session != Some(ticket.session) || self.pending != Some(ticket) {
            return WakeOutcome::Stale;
        }

        self.pending = None;
        let rearm = if should_run { self.arm(now_ms) } else { None };

        WakeOutcome::Fired { rearm }
    }

    fn arm(&mut self, now_ms: i64) -> Option<ArmedWake> {
        let session = self.session?;
        self.generation = self.generation.wrapping_add(1);

        let ticket = WakeTicket {
            session,
            generation: self.generation,
        };
        self.pending = Some(ticket);

        Some(ArmedWake {
            ticket,
            delay_ms: next_wake_delay(now_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> RedrawScheduler {
        let mut scheduler = RedrawScheduler::new();
        assert!(scheduler.begin(SessionId::first()).is_none());
        scheduler
    }

    #[test]
    fn test_should_run() {
        assert!(should_run(true, false));
        assert!(!should_run(true, true));
        assert!(!should_run(false, false));
        assert!(!should_run(false, true));
    }

    #[test]
    fn test_next_wake_delay() {
        assert_eq!(next_wake_delay(12_345), 655);
        assert_eq!(next_wake_delay(12_000), 1000);
        assert_eq!(next_wake_delay(12_999), 1);
        assert_eq!(next_wake_delay(0), 1000);
        assert_eq!(next_wake_delay(-1), 1);
        assert_eq!(next_wake_delay(-1500), 500);
    }

    #[test]
    fn test_reevaluate_arms_once() {
        let mut scheduler = started();
        let first = scheduler.reevaluate(true, 12_345);
        assert!(first.cancelled.is_none());
        let armed = first.armed.unwrap();
        assert_eq!(armed.delay_ms, 655);
        assert_eq!(scheduler.pending(), Some(armed.ticket));

        // Re-evaluating replaces the pending wake
        let second = scheduler.reevaluate(true, 12_500);
        assert_eq!(second.cancelled, Some(armed.ticket));
        let rearmed = second.armed.unwrap();
        assert_ne!(rearmed.ticket, armed.ticket);
        assert_eq!(rearmed.delay_ms, 500);
    }

    #[test]
    fn test_reevaluate_stops() {
        let mut scheduler = started();
        let armed = scheduler.reevaluate(true, 0).armed.unwrap();

        let stop = scheduler.reevaluate(false, 10);
        assert_eq!(stop.cancelled, Some(armed.ticket));
        assert!(stop.armed.is_none());
        assert!(scheduler.pending().is_none());

        assert!(scheduler.reevaluate(false, 20).is_empty());
    }

    #[test]
    fn test_wake_fires_and_rearms() {
        let mut scheduler = started();
        let armed = scheduler.reevaluate(true, 12_345).armed.unwrap();

        match scheduler.on_wake(armed.ticket, true, 13_000) {
            WakeOutcome::Fired { rearm: Some(next) } => {
                assert_eq!(next.delay_ms, 1000);
                assert_eq!(scheduler.pending(), Some(next.ticket));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_wake_fires_without_rearm() {
        let mut scheduler = started();
        let armed = scheduler.reevaluate(true, 0).armed.unwrap();

        let outcome = scheduler.on_wake(armed.ticket, false, 1000);
        assert_eq!(outcome, WakeOutcome::Fired { rearm: None });
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut scheduler = started();
        let old = scheduler.reevaluate(true, 0).armed.unwrap();
        scheduler.reevaluate(true, 100);

        assert_eq!(scheduler.on_wake(old.ticket, true, 1000), WakeOutcome::Stale);
        assert!(scheduler.pending().is_some());
    }

    #[test]
    fn test_fired_ticket_is_not_reused() {
        let mut scheduler = started();
        let armed = scheduler.reevaluate(true, 0).armed.unwrap();
        assert!(scheduler.on_wake(armed.ticket, false, 1000).is_fired());
        assert_eq!(scheduler.on_wake(armed.ticket, false, 1000), WakeOutcome::Stale);
    }

    #[test]
    fn test_end_makes_tickets_stale() {
        let mut scheduler = started();
        let armed = scheduler.reevaluate(true, 0).armed.unwrap();

        assert_eq!(scheduler.end(), Some(armed.ticket));
        assert!(scheduler.session().is_none());
        assert_eq!(scheduler.on_wake(armed.ticket, true, 1000), WakeOutcome::Stale);
        assert!(scheduler.reevaluate(true, 1000).is_empty());
    }

    #[test]
    fn test_new_session_rejects_old_tickets() {
        let mut scheduler = started();
        let old = scheduler.reevaluate(true, 0).armed.unwrap();
        scheduler.end();

        scheduler.begin(SessionId::first().next());
        let fresh = scheduler.reevaluate(true, 0).armed.unwrap();

        // Same generation number, different session
        assert_eq!(fresh.ticket.generation, old.ticket.generation);
        assert_eq!(scheduler.on_wake(old.ticket, true, 1000), WakeOutcome::Stale);
        assert!(scheduler.on_wake(fresh.ticket, true, 1000).is_fired());
    }

    #[test]
    fn test_begin_returns_leftover() {
        let mut scheduler = started();
        let armed = scheduler.reevaluate(true, 0).armed.unwrap();
        assert_eq!(scheduler.begin(SessionId::first().next()), Some(armed.ticket));
    }

    #[test]
    fn test_session_ids() {
        let first = SessionId::first();
        assert_eq!(first.raw(), 1);
        assert_eq!(first.next().raw(), 2);
        assert_ne!(first, first.next());
    }
}
