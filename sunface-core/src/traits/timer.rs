//! Clock and wake timer traits
//!
//! The host owns the wall clock and the message-loop timer. The engine only
//! sees these two seams.

use crate::scheduler::WakeTicket;
use crate::time::TimeZone;

/// Wall clock and system time zone
pub trait Clock {
    /// Current time as milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;

    /// Current system default time zone
    fn system_time_zone(&self) -> TimeZone;
}

/// Host timer that delivers a wake back to the engine
///
/// When a wake fires the host calls
/// [`FaceEngine::on_wake`](crate::engine::FaceEngine::on_wake) with the
/// same ticket.
pub trait WakeTimer {
    /// Deliver `ticket` after `delay_ms`
    fn arm(&mut self, ticket: WakeTicket, delay_ms: u64);

    /// Drop a previously armed wake
    ///
    /// Cancelling a wake that already fired is allowed and does nothing.
    fn cancel(&mut self, ticket: WakeTicket);
}
