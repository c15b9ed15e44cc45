use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Args;
use stegoscribe_core::CodecOptions;

use crate::CliResult;

/// everything above is visually indistinguishable from the carrier
const EXCELLENT_PSNR: f64 = 40.0;

/// Hides a password protected message in an image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message, asked for if missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file, defaults to stego_<method>_<timestamp>.png
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden, asked for if missing
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = self.message.or_else(crate::cli::ask_for_message);
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(true));
        let output = self
            .write_to_file
            .unwrap_or_else(|| default_output(&options));

        let report = stegoscribe_core::api::hide::prepare()
            .with_image(&self.media)
            .with_output(output)
            .use_message(message)
            .using_password(password)
            .with_options(options)
            .execute()?;

        println!("Stego image written to {}", report.output.display());
        if report.psnr > EXCELLENT_PSNR {
            println!("PSNR: {:.2} dB (excellent quality)", report.psnr);
        } else {
            println!("PSNR: {:.2} dB", report.psnr);
        }

        Ok(())
    }
}

fn default_output(options: &CodecOptions) -> PathBuf {
    let method = match options {
        CodecOptions::Lsb => "lsb",
        CodecOptions::Dct(_) => "dct",
    };
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    PathBuf::from(format!("stego_{method}_{timestamp}.png"))
}
