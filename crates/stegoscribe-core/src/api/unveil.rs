use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Password;
use crate::media::image::Codec;
use crate::media::Media;
use crate::{envelope, CodecOptions, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they have to match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the password the message was encrypted with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and returns the plain text message
    pub fn execute(self) -> Result<String, StegoError> {
        let Some(password) = self.password.secret() else {
            return Err(StegoError::MissingPassword);
        };
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let codec = Codec::try_from(self.options)?;
        let media = Media::from_file(&secret_media)?;
        let unveiled = media.unveil_data(&codec);
        if let Some(payload) = unveiled.payload() {
            info!("found {} characters of payload", payload.len());
        }
        if !unveiled.is_terminated() {
            debug!("{secret_media:?} holds no terminated payload");
        }
        let sealed = unveiled.into_payload()?;

        envelope::decrypt(&sealed, password)
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    use super::*;
    use crate::media::{DctCodecOptions, Persist};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        Media::from_image(RgbImage::from_pixel(64, 64, Rgb([200, 120, 40])))
            .save_as(&carrier)
            .expect("Failed to write carrier");
        let report = crate::api::hide::prepare()
            .with_message("Hello World")
            .with_image(&carrier)
            .using_password("Secret42")
            .with_output(temp_dir.path().join("hello_world.png"))
            .execute()
            .expect("Failed to hide message in image");

        let secret_message = crate::api::unveil::prepare()
            .from_secret_file(report.output)
            .using_password("Secret42")
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(secret_message, "Hello World");
    }

    #[test]
    fn should_not_find_a_payload_with_the_wrong_method() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let plain = temp_dir.path().join("plain.png");
        Media::from_image(RgbImage::from_pixel(64, 64, Rgb([0, 0, 0])))
            .save_as(&plain)
            .expect("Failed to write image");

        let result = prepare()
            .from_secret_file(&plain)
            .using_password("Secret42")
            .with_options(CodecOptions::Dct(DctCodecOptions::default()))
            .execute();

        assert!(matches!(result, Err(StegoError::UnterminatedPayload(_))));
    }

    #[test]
    fn should_fail_without_password_or_carrier() {
        assert!(matches!(
            prepare().from_secret_file("x.png").execute(),
            Err(StegoError::MissingPassword)
        ));
        assert!(matches!(
            prepare().using_password("Secret42").execute(),
            Err(StegoError::CarrierNotSet)
        ));
    }
}
