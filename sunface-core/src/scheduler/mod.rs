//! Redraw scheduler
//!
//! Keeps at most one pending once-per-second wake while the face is
//! visible and interactive.

pub mod redraw;

pub use redraw::{
    next_wake_delay, should_run, ArmedWake, RedrawScheduler, Reschedule, SessionId, WakeOutcome,
    WakeTicket,
};
