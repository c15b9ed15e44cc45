use std::path::{Path, PathBuf};

use log::info;

use super::Password;
use crate::media::image::{ChannelCodec, Codec};
use crate::media::{Media, Persist};
use crate::{envelope, quality, CodecOptions, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// what a successful hide wrote
#[derive(Debug, Clone, PartialEq)]
pub struct HideReport {
    /// the file that was actually written, always a PNG
    pub output: PathBuf,
    /// quality of the stego image compared to the carrier, in dB
    pub psnr: f64,
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where to write the stego image, lossy formats are replaced by PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password, hiding fails without one
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn execute(self) -> Result<HideReport, StegoError> {
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };
        let Some(password) = self.password.secret() else {
            return Err(StegoError::MissingPassword);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let codec = Codec::try_from(self.options)?;
        let carrier = Media::from_file(&image)?;
        let sealed = envelope::encrypt(&message, password)?;
        info!(
            "hiding {} characters in {image:?}, capacity {} characters",
            sealed.len(),
            codec.capacity_bytes(carrier.image())
        );

        let stego = carrier.hide_data(&sealed, &codec)?;
        let output = stego.save_as(&output)?;
        let psnr = quality::psnr(carrier.image(), stego.image())?;

        Ok(HideReport { output, psnr })
    }
}
