//! Inbound message mailbox
//!
//! The companion link delivers messages on its own context. They are copied
//! into a bounded channel here and applied later on the event thread by
//! [`FaceEngine::drain`](crate::engine::FaceEngine::drain).

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use sunface_protocol::{Envelope, EnvelopeError};

use crate::traits::{Diagnostic, DiagnosticSink};

/// Default mailbox capacity
pub const MAILBOX_DEPTH: usize = 4;

/// Errors when posting a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MailboxError {
    /// Mailbox holds `N` undrained messages
    Full,
    /// Path does not fit an envelope
    PathTooLong,
    /// Payload does not fit an envelope
    PayloadTooLarge,
}

impl From<EnvelopeError> for MailboxError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::PathTooLong => MailboxError::PathTooLong,
            EnvelopeError::PayloadTooLarge => MailboxError::PayloadTooLarge,
        }
    }
}

/// Bounded queue of inbound messages
///
/// Use `CriticalSectionRawMutex` when the poster runs in an interrupt or on
/// another core, `NoopRawMutex` when both sides share one executor.
pub struct Mailbox<M: RawMutex, const N: usize> {
    channel: Channel<M, Envelope, N>,
}

/// Mailbox with the default capacity
pub type FaceMailbox<M> = Mailbox<M, MAILBOX_DEPTH>;

impl<M: RawMutex, const N: usize> Default for Mailbox<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> Mailbox<M, N> {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Copy a message into the mailbox
    ///
    /// Never blocks; a full mailbox refuses the newest message.
    pub fn post(&self, path: &str, payload: &[u8]) -> Result<(), MailboxError> {
        let envelope = Envelope::new(path, payload)?;
        self.channel
            .try_send(envelope)
            .map_err(|_| MailboxError::Full)
    }

    /// Copy a message into the mailbox, reporting a refusal to `sink`
    pub fn post_reporting<S: DiagnosticSink + ?Sized>(
        &self,
        path: &str,
        payload: &[u8],
        sink: &mut S,
    ) -> Result<(), MailboxError> {
        self.post(path, payload).map_err(|err| {
            sink.emit(Diagnostic::MailboxRefused(err));
            err
        })
    }

    /// Take the oldest message, if any
    pub fn try_take(&self) -> Option<Envelope> {
        self.channel.try_receive().ok()
    }

    /// Number of queued messages
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}
