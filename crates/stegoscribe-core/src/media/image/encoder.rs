use std::ops::DerefMut;
use std::slice::IterMut;

use image::RgbImage;

use crate::media::MediaPrimitiveMut;

/// mutable stegano target for image files, based on `RgbImage` by `image` crate
///
/// Walks the color channels in the same order as
/// [`ImageRgbColor`](super::decoder::ImageRgbColor).
///
/// ## Example of usage
/// ```rust
/// use image::{Rgb, RgbImage};
/// use stegoscribe_core::media::image::encoder::ImageRgbColorMut;
/// use stegoscribe_core::media::HideBit;
///
/// let mut image = RgbImage::from_pixel(1, 1, Rgb([10, 10, 10]));
/// for (color, bit) in ImageRgbColorMut::new(&mut image).zip([true, false, true]) {
///     color.hide_bit(bit);
/// }
/// assert_eq!(image.get_pixel(0, 0).0, [11, 10, 11]);
/// ```
pub struct ImageRgbColorMut<'a> {
    samples: IterMut<'a, u8>,
}

impl<'a> ImageRgbColorMut<'a> {
    /// constructor for a given `RgbImage` that lives somewhere
    pub fn new(input: &'a mut RgbImage) -> Self {
        Self {
            samples: input.deref_mut().iter_mut(),
        }
    }
}

impl<'a> Iterator for ImageRgbColorMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.samples.next().map(MediaPrimitiveMut::ImageColorChannel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}
