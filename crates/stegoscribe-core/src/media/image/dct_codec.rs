//! # DCT Codec
//!
//! Hides one bit per whole 8×8 block of a single color plane by quantization
//! index modulation (QIM) of the mid frequency coefficient (4,4):
//! the coefficient is moved to a multiple `k * step` of the quantization step,
//! an even `k` stands for `0`, an odd `k` for `1`.
//!
//! Blocks are visited row by row, pixels of trailing partial blocks at the
//! right and bottom edge are never touched. The payload is terminated by the
//! [`END_MARKER`], blocks behind it keep their original coefficients.
//!
//! `k` is always computed with [`f64::round`], rounding half away from zero,
//! for embedding and extraction alike.
//!
//! ## Robustness
//!
//! A disturbance of the carrier coefficient keeps the bit as long as it stays
//! below `step / 2` minus the residual that the 8 bit write back leaves behind.
//! Every sample is rounded by at most 1/2 and the (4,4) basis has magnitude 1/8
//! in all 64 samples, so that residual is at most [`MAX_ROUNDING_RESIDUAL`] = 4.
//! For the default step of 50 any disturbance below 21 is survived, unless the
//! block was saturated and clamped while embedding.

use image::RgbImage;
use log::{debug, warn};

use super::transform::{self, Block, BLOCK_SIZE};
use super::ChannelCodec;
use crate::bit_codec::{to_bits, ByteAssembler};
use crate::envelope::END_MARKER;
use crate::error::StegoError;
use crate::media::payload::{excerpt, PayloadScanner, Unveiled};
use crate::media::DctCodecOptions;
use crate::result::Result;

/// row and column of the carrier coefficient inside of a block
pub const CARRIER_COEFFICIENT: (usize, usize) = (4, 4);

const COEFFICIENT_INDEX: usize = CARRIER_COEFFICIENT.0 * BLOCK_SIZE + CARRIER_COEFFICIENT.1;

/// upper bound of the coefficient error left by rounding a block to 8 bit samples
pub const MAX_ROUNDING_RESIDUAL: f64 = 0.5 * 0.125 * (BLOCK_SIZE * BLOCK_SIZE) as f64;

/// how far the search for a multiple of the right parity may move away from the nearest one
const PARITY_SEARCH_RADIUS: i64 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct DctCodec {
    options: DctCodecOptions,
}

impl Default for DctCodec {
    fn default() -> Self {
        Self {
            options: DctCodecOptions::default(),
        }
    }
}

impl DctCodec {
    /// fails with [`StegoError::InvalidStep`] for a step that is not a positive finite number
    pub fn new(options: DctCodecOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &DctCodecOptions {
        &self.options
    }

    /// top left corners of all whole blocks, row by row
    fn blocks(&self, image: &RgbImage) -> impl Iterator<Item = (u32, u32)> {
        let size = BLOCK_SIZE as u32;
        let (columns, rows) = (image.width() / size, image.height() / size);

        (0..rows).flat_map(move |row| (0..columns).map(move |col| (col * size, row * size)))
    }

    fn read_block(&self, image: &RgbImage, x0: u32, y0: u32) -> Block {
        let channel = self.options.carrier.index();
        let mut block = [0.0; BLOCK_SIZE * BLOCK_SIZE];
        for (i, sample) in block.iter_mut().enumerate() {
            let (dx, dy) = ((i % BLOCK_SIZE) as u32, (i / BLOCK_SIZE) as u32);
            *sample = f64::from(image.get_pixel(x0 + dx, y0 + dy).0[channel]);
        }
        block
    }

    fn write_block(&self, image: &mut RgbImage, x0: u32, y0: u32, block: &Block) {
        let channel = self.options.carrier.index();
        for (i, sample) in block.iter().enumerate() {
            let (dx, dy) = ((i % BLOCK_SIZE) as u32, (i / BLOCK_SIZE) as u32);
            image.get_pixel_mut(x0 + dx, y0 + dy).0[channel] = sample.clamp(0.0, 255.0).round() as u8;
        }
    }

    fn quantization_index(&self, coefficient: f64) -> i64 {
        (coefficient / self.options.step).round() as i64
    }

    fn read_bit(&self, image: &RgbImage, x0: u32, y0: u32) -> bool {
        let coefficients = transform::forward(&self.read_block(image, x0, y0));
        is_odd(self.quantization_index(coefficients[COEFFICIENT_INDEX]))
    }

    /// multiples of the step to try for a bit, nearest one of the right parity first
    fn candidates(&self, coefficient: f64, bit: bool) -> impl Iterator<Item = i64> {
        let position = coefficient / self.options.step;
        let nearest = position.round() as i64;
        let primary = if is_odd(nearest) == bit {
            nearest
        } else if position >= nearest as f64 {
            nearest.saturating_add(1)
        } else {
            nearest.saturating_sub(1)
        };

        std::iter::once(primary).chain(
            (1..=PARITY_SEARCH_RADIUS)
                .flat_map(move |d| [primary.saturating_add(d), primary.saturating_sub(d)]),
        )
    }

    /// Writes one bit into the block at (x0, y0).
    ///
    /// The written block is clamped and rounded to 8 bit samples, which can
    /// break the parity of saturated blocks. Those get the next candidates
    /// until the block reads back correctly.
    fn embed_bit(&self, image: &mut RgbImage, x0: u32, y0: u32, bit: bool) -> bool {
        let coefficients = transform::forward(&self.read_block(image, x0, y0));

        for k in self.candidates(coefficients[COEFFICIENT_INDEX], bit) {
            let mut modified = coefficients;
            modified[COEFFICIENT_INDEX] = k as f64 * self.options.step;
            self.write_block(image, x0, y0, &transform::inverse(&modified));

            if self.read_bit(image, x0, y0) == bit {
                return true;
            }
        }

        false
    }
}

fn is_odd(k: i64) -> bool {
    k.rem_euclid(2) == 1
}

impl ChannelCodec for DctCodec {
    fn capacity(&self, image: &RgbImage) -> usize {
        let size = BLOCK_SIZE as u32;
        (image.width() / size) as usize * (image.height() / size) as usize
    }

    fn embed(&self, image: &RgbImage, payload: &str) -> Result<RgbImage> {
        let bits = to_bits(&format!("{payload}{END_MARKER}"))?;
        let available = self.capacity(image);
        if bits.len() > available {
            return Err(StegoError::CapacityExceeded {
                required: bits.len(),
                available,
            });
        }
        debug!(
            "hiding {} of {available} bits via DCT, step {}",
            bits.len(),
            self.options.step
        );

        let mut stego = image.clone();
        for ((x0, y0), bit) in self.blocks(image).zip(bits) {
            if !self.embed_bit(&mut stego, x0, y0, bit) {
                warn!("block at ({x0}, {y0}) is saturated and does not hold its bit");
            }
        }

        Ok(stego)
    }

    fn extract(&self, image: &RgbImage) -> Unveiled {
        let bits = self
            .blocks(image)
            .map(|(x0, y0)| self.read_bit(image, x0, y0));

        match PayloadScanner::default().scan(ByteAssembler::new(bits)) {
            (true, text) => {
                let payload = text.strip_suffix(END_MARKER).unwrap_or(&text);
                Unveiled::Terminated(payload.to_string())
            }
            (false, garbage) => {
                debug!("no end marker found in {} DCT characters", garbage.len());
                Unveiled::Unterminated(excerpt(&garbage))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::media::ColorChannel;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn should_count_whole_blocks_only() {
        let codec = DctCodec::default();

        assert_eq!(codec.capacity(&RgbImage::new(64, 64)), 64);
        assert_eq!(codec.capacity(&RgbImage::new(71, 15)), 8);
        assert_eq!(codec.capacity(&RgbImage::new(7, 100)), 0);
    }

    #[test]
    fn should_visit_blocks_row_by_row() {
        let codec = DctCodec::default();
        let blocks: Vec<_> = codec.blocks(&RgbImage::new(17, 16)).collect();

        assert_eq!(blocks, vec![(0, 0), (8, 0), (0, 8), (8, 8)]);
    }

    #[test]
    fn should_prefer_the_nearest_multiple() {
        let codec = DctCodec::default();

        // 60 / 50 = 1.2 → nearest 1 is odd
        assert_eq!(codec.candidates(60.0, true).next(), Some(1));
        // moving towards the original value, 1.2 lies above 1
        assert_eq!(codec.candidates(60.0, false).next(), Some(2));
        // -0.8 rounds to -1, moves towards -0.8
        assert_eq!(codec.candidates(-40.0, false).next(), Some(0));
        assert_eq!(codec.candidates(-40.0, true).next(), Some(-1));
    }

    #[test]
    fn should_encode_and_decode() {
        let image = prepare_gradient_image(128, 96);
        let codec = DctCodec::default();

        let stego = codec.embed(&image, "QIM").unwrap();

        assert_eq!(codec.extract(&stego), Unveiled::Terminated("QIM".to_string()));
    }

    #[test]
    fn should_only_touch_the_carrier_channel() {
        let image = prepare_gradient_image(128, 96);
        let codec =
            DctCodec::new(DctCodecOptions::default().with_carrier(ColorChannel::Green)).unwrap();

        let stego = codec.embed(&image, "QIM").unwrap();

        for (original, changed) in image.pixels().zip(stego.pixels()) {
            assert_eq!(original.0[0], changed.0[0]);
            assert_eq!(original.0[2], changed.0[2]);
        }
        assert_ne!(image, stego);
    }

    #[test]
    fn should_survive_saturated_blocks() {
        // a solid red image has a blue plane of zeros, half of each pattern is clamped away
        let image = RgbImage::from_pixel(128, 128, Rgb([255, 0, 0]));
        let codec = DctCodec::default();

        let stego = codec.embed(&image, "red").unwrap();

        assert_eq!(codec.extract(&stego), Unveiled::Terminated("red".to_string()));
    }

    #[test]
    fn should_report_missing_capacity_before_writing() {
        let image = prepare_gradient_image(64, 64);

        match DctCodec::default().embed(&image, "too long") {
            Err(StegoError::CapacityExceeded {
                required,
                available,
            }) => {
                assert_eq!(required, 8 * (8 + END_MARKER.len()));
                assert_eq!(available, 64);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn should_bound_the_garbage_without_marker() {
        let image = prepare_gradient_image(256, 256);

        match DctCodec::default().extract(&image) {
            Unveiled::Unterminated(garbage) => {
                assert_eq!(garbage.chars().count(), 50 + 3);
                assert!(garbage.ends_with("..."));
            }
            terminated => panic!("unexpected {terminated:?}"),
        }
    }

    #[test]
    fn should_refuse_degenerated_steps() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = DctCodecOptions::default().with_step(step);

            assert!(
                matches!(DctCodec::new(options), Err(StegoError::InvalidStep(_))),
                "step {step} was accepted"
            );
        }
    }

    #[test]
    fn should_not_overflow_for_tiny_steps() {
        let options = DctCodecOptions::default().with_step(f64::MIN_POSITIVE);
        let codec = DctCodec::new(options).unwrap();

        // the quantization index saturates, the search must not overflow
        assert_eq!(codec.candidates(100.0, false).count(), 9);
        let _ = codec.embed(&prepare_gradient_image(128, 128), "x");
    }

    #[test]
    fn should_leave_at_most_the_rounding_residual() {
        let image = prepare_gradient_image(128, 128);
        let codec = DctCodec::default();
        let step = codec.options().step;

        let stego = codec.embed(&image, "QIM").unwrap();

        for (x0, y0) in codec.blocks(&stego).take(8 * (3 + END_MARKER.len())) {
            let coefficients = transform::forward(&codec.read_block(&stego, x0, y0));
            let coefficient = coefficients[COEFFICIENT_INDEX];
            let target = codec.quantization_index(coefficient) as f64 * step;
            assert!(
                (coefficient - target).abs() <= MAX_ROUNDING_RESIDUAL + 1e-9,
                "block ({x0}, {y0}) is {coefficient}, {target} expected"
            );
        }
    }
}
