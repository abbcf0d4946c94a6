//! Drawing surface trait
//!
//! The composer produces a [`Frame`](crate::compose::Frame) of commands; a
//! surface turns each command into pixels. Board crates implement this over
//! their graphics stack.

use crate::compose::{BitmapStyle, Bounds, TextStyle};
use crate::config::Color;
use crate::weather::IconCategory;

/// Trait for anything a frame can be drawn on
pub trait DrawSurface {
    /// Error reported by the underlying canvas
    type Error;

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, bounds: Bounds, color: Color) -> Result<(), Self::Error>;

    /// Draw text horizontally centred on `x`, with its baseline at `y`
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> Result<(), Self::Error>;

    /// Draw a weather icon centred on `(x, y)`
    fn draw_bitmap(
        &mut self,
        icon: IconCategory,
        x: i32,
        y: i32,
        style: &BitmapStyle,
    ) -> Result<(), Self::Error>;
}
