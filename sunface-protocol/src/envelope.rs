//! Owned copy of an inbound companion message
//!
//! The messaging channel hands out borrowed `(path, payload)` pairs that are
//! only valid inside its callback. An [`Envelope`] copies them into fixed-size
//! storage so the message can be queued and handled later on the event thread.

use heapless::{String, Vec};

/// Maximum path length in bytes
pub const MAX_PATH_LEN: usize = 32;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Errors that can occur while copying a message into an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnvelopeError {
    /// Path exceeds [`MAX_PATH_LEN`]
    PathTooLong,
    /// Payload exceeds [`MAX_PAYLOAD_LEN`]
    PayloadTooLarge,
}

/// A queued companion message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Envelope {
    path: String<MAX_PATH_LEN>,
    payload: Vec<u8, MAX_PAYLOAD_LEN>,
}

impl Envelope {
    /// Copy a path and payload into a new envelope
    pub fn new(path: &str, payload: &[u8]) -> Result<Self, EnvelopeError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(EnvelopeError::PayloadTooLarge);
        }

        let mut path_buf = String::new();
        path_buf
            .push_str(path)
            .map_err(|_| EnvelopeError::PathTooLong)?;

        let mut payload_buf = Vec::new();
        payload_buf
            .extend_from_slice(payload)
            .map_err(|_| EnvelopeError::PayloadTooLarge)?;

        Ok(Self {
            path: path_buf,
            payload: payload_buf,
        })
    }

    /// Message path
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Message payload
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
