//! Drawing surface over an embedded-graphics target
//!
//! Works with any `DrawTarget` whose color can be built from `Rgb888`,
//! which covers the RGB565 and RGB888 panels used on watches.

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Text};
use sunface_core::compose::{BitmapStyle, Bounds, TextStyle};
use sunface_core::config::Color;
use sunface_core::traits::DrawSurface;
use sunface_core::weather::IconCategory;

use crate::fonts::font_for_height;
use crate::icons::IconAtlas;

/// Errors while drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError<E> {
    /// Draw target reported an error
    Target(E),
    /// Atlas has no bitmap for this icon
    MissingIcon(IconCategory),
}

/// `DrawSurface` backed by a display driver and an icon atlas
pub struct GraphicsSurface<D, A> {
    target: D,
    atlas: A,
}

impl<D, A> GraphicsSurface<D, A> {
    /// Wrap a draw target
    pub fn new(target: D, atlas: A) -> Self {
        Self { target, atlas }
    }

    /// Underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Underlying draw target, e.g. to flush a framebuffer
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn atlas(&self) -> &A {
        &self.atlas
    }

    /// Give back the target and the atlas
    pub fn release(self) -> (D, A) {
        (self.target, self.atlas)
    }
}

fn to_native<C: From<Rgb888>>(color: Color) -> C {
    Rgb888::new(color.r, color.g, color.b).into()
}

fn extent(len: i32) -> u32 {
    u32::try_from(len).unwrap_or(0)
}

impl<D, A> DrawSurface for GraphicsSurface<D, A>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
    A: IconAtlas<D::Color>,
{
    type Error = SurfaceError<D::Error>;

    fn fill_rect(&mut self, bounds: Bounds, color: Color) -> Result<(), Self::Error> {
        Rectangle::new(
            Point::new(bounds.x, bounds.y),
            Size::new(extent(bounds.width), extent(bounds.height)),
        )
        .into_styled(PrimitiveStyle::with_fill(to_native::<D::Color>(color)))
        .draw(&mut self.target)
        .map_err(SurfaceError::Target)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        // Mono fonts have no intermediate shades; anti-aliasing is a no-op
        let character_style =
            MonoTextStyle::new(font_for_height(style.size_px), to_native::<D::Color>(style.color));

        Text::with_alignment(text, Point::new(x, y), character_style, Alignment::Center)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(SurfaceError::Target)
    }

    fn draw_bitmap(
        &mut self,
        icon: IconCategory,
        x: i32,
        y: i32,
        _style: &BitmapStyle,
    ) -> Result<(), Self::Error> {
        let image = self
            .atlas
            .icon(icon)
            .ok_or(SurfaceError::MissingIcon(icon))?;

        let size = image.size();
        let top_left = Point::new(x - (size.width / 2) as i32, y - (size.height / 2) as i32);

        Image::new(image, top_left)
            .draw(&mut self.target)
            .map_err(SurfaceError::Target)
    }
}
