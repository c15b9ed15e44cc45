use image::RgbImage;
use log::debug;

use super::decoder::ImageRgbColor;
use super::encoder::ImageRgbColorMut;
use super::ChannelCodec;
use crate::bit_codec::{to_bits, ByteAssembler};
use crate::error::StegoError;
use crate::media::payload::{PayloadScanner, Unveiled};
use crate::media::{HideBit, UnveilBit};
use crate::result::Result;

/// Hides one bit in the least significant bit of every color channel.
///
/// Pixels are visited row by row, inside a pixel red, green and blue. Channels
/// behind the payload keep their original bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LsbCodec;

impl ChannelCodec for LsbCodec {
    fn capacity(&self, image: &RgbImage) -> usize {
        3 * image.width() as usize * image.height() as usize
    }

    fn embed(&self, image: &RgbImage, payload: &str) -> Result<RgbImage> {
        let bits = to_bits(payload)?;
        let available = self.capacity(image);
        if bits.len() > available {
            return Err(StegoError::CapacityExceeded {
                required: bits.len(),
                available,
            });
        }
        debug!("hiding {} of {available} bits via LSB", bits.len());

        let mut stego = image.clone();
        for (color, bit) in ImageRgbColorMut::new(&mut stego).zip(bits) {
            color.hide_bit(bit);
        }

        Ok(stego)
    }

    fn extract(&self, image: &RgbImage) -> Unveiled {
        let bits = ImageRgbColor::new(image).map(|color| color.unveil_bit());
        match PayloadScanner::default().scan(ByteAssembler::new(bits)) {
            (true, payload) => Unveiled::Terminated(payload),
            (false, garbage) => {
                debug!("no end marker found in {} LSB characters", garbage.len());
                Unveiled::Unterminated(garbage)
            }
        }
    }
}
