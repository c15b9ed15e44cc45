use std::slice::Iter;

use image::RgbImage;

use crate::media::MediaPrimitive;

/// stegano source for image files, based on `RgbImage` by `image` crate
///
/// Yields every color channel of every pixel, rows top to bottom, pixels left to
/// right and inside a pixel red, green and then blue.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use stegoscribe_core::media::image::decoder::ImageRgbColor;
/// use stegoscribe_core::media::MediaPrimitive;
///
/// let image = RgbImage::from_pixel(2, 1, Rgb([1, 2, 3]));
/// let colors: Vec<MediaPrimitive> = ImageRgbColor::new(&image).collect();
///
/// assert_eq!(colors.len(), 6);
/// assert_eq!(colors[2], MediaPrimitive::ImageColorChannel(3));
/// ```
pub struct ImageRgbColor<'i> {
    samples: Iter<'i, u8>,
}

impl<'i> ImageRgbColor<'i> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'i RgbImage) -> Self {
        Self {
            samples: input.as_raw().iter(),
        }
    }
}

impl Iterator for ImageRgbColor<'_> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().copied().map(MediaPrimitive::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}
