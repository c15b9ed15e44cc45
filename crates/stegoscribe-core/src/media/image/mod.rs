pub mod dct_codec;
pub mod decoder;
pub mod encoder;
pub mod lsb_codec;
pub mod transform;

use enum_dispatch::enum_dispatch;
use image::RgbImage;

pub use dct_codec::DctCodec;
pub use lsb_codec::LsbCodec;

use crate::error::StegoError;
use crate::media::payload::Unveiled;
use crate::media::CodecOptions;
use crate::result::Result;

/// a channel that hides payload text inside of an image
#[enum_dispatch]
pub trait ChannelCodec {
    /// how many payload bits fit into the image
    fn capacity(&self, image: &RgbImage) -> usize;

    /// hides the payload in a copy of the image, the original stays untouched
    fn embed(&self, image: &RgbImage, payload: &str) -> Result<RgbImage>;

    /// reads the payload back, up to the termination marker
    fn extract(&self, image: &RgbImage) -> Unveiled;

    /// capacity in whole payload characters
    fn capacity_bytes(&self, image: &RgbImage) -> usize {
        self.capacity(image) / 8
    }
}

/// all channel codecs, selected by [`CodecOptions`]
#[enum_dispatch(ChannelCodec)]
#[derive(Debug, Clone, PartialEq)]
pub enum Codec {
    Lsb(LsbCodec),
    Dct(DctCodec),
}

impl TryFrom<CodecOptions> for Codec {
    type Error = StegoError;

    fn try_from(options: CodecOptions) -> Result<Self> {
        Ok(match options {
            CodecOptions::Lsb => LsbCodec.into(),
            CodecOptions::Dct(options) => DctCodec::new(options)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::DctCodecOptions;

    #[test]
    fn should_pick_the_codec_from_options() {
        assert_eq!(
            Codec::try_from(CodecOptions::default()).unwrap(),
            Codec::Lsb(LsbCodec)
        );
        assert_eq!(
            Codec::try_from(CodecOptions::Dct(DctCodecOptions::default())).unwrap(),
            Codec::Dct(DctCodec::default())
        );
    }

    #[test]
    fn should_refuse_options_with_a_broken_step() {
        let options = CodecOptions::Dct(DctCodecOptions::default().with_step(0.0));

        assert!(matches!(
            Codec::try_from(options),
            Err(StegoError::InvalidStep(step)) if step == 0.0
        ));
    }

    #[test]
    fn should_dispatch_capacity() {
        let image = RgbImage::new(20, 17);

        assert_eq!(Codec::try_from(CodecOptions::Lsb).unwrap().capacity(&image), 3 * 20 * 17);
        assert_eq!(
            Codec::try_from(CodecOptions::Dct(DctCodecOptions::default()))
                .unwrap()
                .capacity(&image),
            2 * 2
        );
        assert_eq!(Codec::try_from(CodecOptions::Lsb).unwrap().capacity_bytes(&image), 127);
    }
}
