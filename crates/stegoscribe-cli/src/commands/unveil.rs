use std::path::PathBuf;

use clap::Args;
use log::debug;
use stegoscribe_core::{CodecOptions, StegoError};

use crate::CliResult;

/// Unveils a password protected message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the message, asked for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(false));

        match stegoscribe_core::api::unveil::prepare()
            .from_secret_file(&self.media)
            .using_password(password)
            .with_options(options)
            .execute()
        {
            Ok(message) => {
                println!("{message}");
                Ok(())
            }
            Err(
                e @ (StegoError::DecryptionFailure
                | StegoError::MalformedEnvelope
                | StegoError::UnterminatedPayload(_)),
            ) => {
                debug!("unveiling {:?} failed: {e:?}", self.media);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
