//! Diagnostic events
//!
//! Debug output only. Nothing in the engine reads a sink back.

use sunface_protocol::ParseError;

use crate::mailbox::MailboxError;
use crate::scheduler::SessionId;
use crate::weather::IconCategory;

/// Notable things the engine did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic<'a> {
    /// A companion message arrived
    MessageReceived { path: &'a str, len: usize },
    /// A companion message was dropped
    MessageRejected(ParseError),
    /// The mailbox refused a message
    MailboxRefused(MailboxError),
    /// A new forecast replaced the previous one
    WeatherApplied {
        icon: Option<IconCategory>,
        min_temp_c: i32,
        max_temp_c: i32,
    },
    /// Redraw wake armed
    TimerArmed { delay_ms: u64 },
    /// Pending redraw wake cancelled
    TimerCancelled,
    /// A wake arrived for a cancelled or ended ticket
    StaleWake,
    SessionStarted(SessionId),
    SessionEnded(SessionId),
}

impl Diagnostic<'_> {
    /// Check if this diagnostic reports dropped input
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Diagnostic::MessageRejected(_) | Diagnostic::MailboxRefused(_)
        )
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic<'_>);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&mut self, _diagnostic: Diagnostic<'_>) {}
}

/// Sink that logs over defmt
#[cfg(feature = "defmt")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

#[cfg(feature = "defmt")]
impl DiagnosticSink for DefmtSink {
    fn emit(&mut self, diagnostic: Diagnostic<'_>) {
        if diagnostic.is_warning() {
            defmt::warn!("{}", diagnostic);
        } else {
            defmt::debug!("{}", diagnostic);
        }
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, diagnostic: Diagnostic<'_>) {
        (**self).emit(diagnostic);
    }
}
