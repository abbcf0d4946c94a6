//! Configuration types
//!
//! Board-agnostic appearance and layout settings for the face.

pub mod types;

pub use types::*;
