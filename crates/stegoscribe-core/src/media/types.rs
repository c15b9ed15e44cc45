use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

pub use image::RgbImage;
use log::{error, warn};

use crate::error::StegoError;
use crate::media::image::{ChannelCodec, Codec};
use crate::media::payload::Unveiled;
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography, always held as 8 bit RGB
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    image: RgbImage,
}

impl From<RgbImage> for Media {
    fn from(image: RgbImage) -> Self {
        Self::from_image(image)
    }
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(StegoError::UnsupportedMedia);
        };
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Ok(Self::from_image(
                image::open(f)
                    .map_err(|e| {
                        error!("Error reading image {f:?}: {e}");
                        StegoError::InvalidImageMedia
                    })?
                    .to_rgb8(),
            )),
            _ => Err(StegoError::UnsupportedMedia),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// hides the payload in a copy of this media
    pub fn hide_data(&self, payload: &str, codec: &Codec) -> Result<Media> {
        codec.embed(&self.image, payload).map(Media::from_image)
    }

    pub fn unveil_data(&self, codec: &Codec) -> Unveiled {
        codec.extract(&self.image)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<PathBuf> {
        let target = lossless_target(file);
        let f = File::create(&target).map_err(|e| {
            error!("Error creating file {target:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })?;

        Ok(target)
    }
}

pub(crate) fn is_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "jpg" | "jpeg"))
        .unwrap_or(false)
}

/// Stego images are written as PNG only, any recompression would destroy the hidden bits.
pub fn lossless_target(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_png {
        return path.to_path_buf();
    }
    let target = path.with_extension("png");
    if is_jpeg_extension(path) {
        warn!("JPEG would destroy the hidden data, writing {target:?} instead of {path:?}");
    } else {
        warn!("Writing PNG to {target:?} instead of {path:?}");
    }
    target
}
