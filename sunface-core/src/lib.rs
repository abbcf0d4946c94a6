//! Board-agnostic core logic for the Sunface watch face
//!
//! This crate contains everything that does not depend on a particular
//! watch host or display:
//!
//! - Weather icon classification and message parsing
//! - Render state and its transitions
//! - Once-per-second redraw scheduling
//! - Frame composition (layout of time, date and forecast)
//! - Inbound message mailbox
//! - The engine tying these to host traits (clock, timer, surface)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod compose;
pub mod config;
pub mod engine;
pub mod mailbox;
pub mod scheduler;
pub mod state;
pub mod time;
pub mod traits;
pub mod weather;

pub use engine::{FaceEngine, Redraw};
