//! # StegoScribe Core API
//!
//! Hides password protected text messages inside of images. A message is
//! first sealed into a [`envelope`] (PBKDF2 key derivation, authenticated
//! encryption, base64url framing) and then written into the pixels by one of
//! the two channel codecs:
//! - [`LsbCodec`][lsb] hides one bit per color channel, highest capacity
//! - [`DctCodec`][dct] hides one bit per 8×8 block, survives small disturbances
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use stegoscribe_core::media::{Media, Persist};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! Media::from_image(RgbImage::from_pixel(100, 100, Rgb([255, 0, 0])))
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! let report = stegoscribe_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .using_password("SuperSecret42") // will encrypt the message with this password
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! assert!(report.psnr > 40.0);
//!
//! let message = stegoscribe_core::api::unveil::prepare()
//!     .from_secret_file(&report.output)
//!     .using_password("SuperSecret42")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Use the DCT channel on images in memory
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use stegoscribe_core::{ChannelCodec, Codec, CodecOptions, DctCodecOptions, Unveiled};
//!
//! let carrier = RgbImage::from_fn(128, 128, |x, y| Rgb([100, (x + y) as u8, 120]));
//! let codec = Codec::try_from(CodecOptions::Dct(DctCodecOptions::default()))
//!     .expect("Failed to create codec");
//!
//! let stego = codec.embed(&carrier, "QIM").expect("Failed to embed");
//! assert_eq!(codec.extract(&stego), Unveiled::Terminated("QIM".to_string()));
//! ```
//!
//! [lsb]: ./media/image/lsb_codec/struct.LsbCodec.html
//! [dct]: ./media/image/dct_codec/struct.DctCodec.html

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    // clippy::cast_lossless,
    // clippy::missing_panics_doc,
    clippy::redundant_else,
    // clippy::use_self,
)]

pub mod api;
pub mod bit_codec;
pub mod envelope;
pub mod error;
pub mod media;
pub mod quality;
pub mod result;

pub use crate::envelope::{CryptoEnvelope, PasswordCipher, END_MARKER};
pub use crate::error::StegoError;
pub use crate::media::image::{ChannelCodec, Codec, DctCodec, LsbCodec};
pub use crate::media::{
    ColorChannel, CodecOptions, DctCodecOptions, Media, Persist, Unveiled, DEFAULT_DCT_STEP,
};
pub use crate::quality::psnr;
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, RgbImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2 ) | 1,0 -> (3, 4, 5 ) | ...
    /// | 0,1 -> (12,13,14) | 1,1 -> (15,16,17) | ...
    /// y ...
    pub fn prepare_4x6_linear_growing_colors() -> RgbImage {
        ImageBuffer::from_fn(4, 6, |x, y| {
            let i = (3 * x + 12 * y) as u8;
            image::Rgb([i, i + 1, i + 2])
        })
    }

    /// Smooth gradients between 40 and 230 in every channel, far from saturation,
    /// so that DCT embedding never needs to clamp.
    pub fn prepare_gradient_image(width: u32, height: u32) -> RgbImage {
        let scale = |v: u32, max: u32| (40 + v * 190 / max.max(1)) as u8;
        ImageBuffer::from_fn(width, height, |x, y| {
            image::Rgb([
                scale(x, width - 1),
                scale(y, height - 1),
                scale(x + y, width + height - 2),
            ])
        })
    }
}
