//! Weather icon lookup

use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::PixelColor;
use sunface_core::weather::IconCategory;

/// Source of weather icon bitmaps
///
/// Implementations usually wrap `ImageRaw` or `Bmp` images baked into
/// flash.
pub trait IconAtlas<C: PixelColor> {
    /// Image type returned for each icon
    type Image: ImageDrawable<Color = C>;

    /// Bitmap for an icon category, if the atlas has one
    fn icon(&self, icon: IconCategory) -> Option<&Self::Image>;
}

impl<C: PixelColor, A: IconAtlas<C>> IconAtlas<C> for &A {
    type Image = A::Image;

    fn icon(&self, icon: IconCategory) -> Option<&Self::Image> {
        (**self).icon(icon)
    }
}

/// Atlas holding at most one image per icon category
#[derive(Debug, Clone)]
pub struct IconSet<I> {
    images: [Option<I>; IconCategory::ALL.len()],
}

impl<I> Default for IconSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> IconSet<I> {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            images: core::array::from_fn(|_| None),
        }
    }

    /// Add an image, builder style
    pub fn with(mut self, icon: IconCategory, image: I) -> Self {
        self.insert(icon, image);
        self
    }

    /// Set the image for an icon, returning the previous one
    pub fn insert(&mut self, icon: IconCategory, image: I) -> Option<I> {
        self.images[icon as usize].replace(image)
    }

    /// Number of icons with an image
    pub fn len(&self) -> usize {
        self.images.iter().filter(|image| image.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C, I> IconAtlas<C> for IconSet<I>
where
    C: PixelColor,
    I: ImageDrawable<Color = C>,
{
    type Image = I;

    fn icon(&self, icon: IconCategory) -> Option<&I> {
        self.images[icon as usize].as_ref()
    }
}
