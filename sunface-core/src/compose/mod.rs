//! Frame composition
//!
//! Turns a [`RenderState`](crate::state::RenderState) and the current time
//! into an ordered list of draw commands. Nothing here touches a display.

pub mod composer;
pub mod frame;

pub use composer::FrameComposer;
pub use frame::{BitmapStyle, Bounds, DrawCommand, Frame, TextStyle, MAX_DRAW_COMMANDS};
