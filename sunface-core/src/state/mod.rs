//! Render state and its transitions
//!
//! Everything the face remembers between frames lives in one
//! [`RenderState`] value. Events never poke individual fields; each one is
//! applied through [`RenderState::transition`], which returns the complete
//! next state.

pub mod events;
pub mod render;

pub use events::FaceEvent;
pub use render::{RenderState, Transition};
