use crate::error::StegoError;
use crate::result::Result;

/// Codec configuration for steganography encoding/decoding
///
/// - `Lsb` → one bit in the lowest bit of every color channel, highest capacity
/// - `Dct` → one bit per 8×8 block in a DCT coefficient, survives small disturbances
///
/// Both methods are written as PNG, the same method has to be used for unveiling.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum CodecOptions {
    #[default]
    Lsb,
    Dct(DctCodecOptions),
}

/// Default quantization step for DCT encoding
pub const DEFAULT_DCT_STEP: f64 = 50.0;

/// Options for DCT (quantization index modulation) image encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DctCodecOptions {
    /// Quantization granularity of the carrier coefficient.
    /// A bigger step survives more noise but changes the pixels more visibly.
    pub step: f64,

    /// The color plane that carries the data, the others stay untouched
    pub carrier: ColorChannel,
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_DCT_STEP,
            carrier: ColorChannel::Blue,
        }
    }
}

impl DctCodecOptions {
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_carrier(mut self, carrier: ColorChannel) -> Self {
        self.carrier = carrier;
        self
    }

    /// the step has to be a positive finite number
    pub fn validate(&self) -> Result<()> {
        if self.step.is_finite() && self.step > 0.0 {
            Ok(())
        } else {
            Err(StegoError::InvalidStep(self.step))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// position of the channel inside of an RGB pixel
    pub fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }
}
