use std::path::PathBuf;

use clap::Args;
use stegoscribe_core::Media;

use crate::CliResult;

/// Compares a carrier with its stego image
#[derive(Args, Debug)]
pub struct PsnrArgs {
    /// The original carrier image
    #[arg(value_name = "original image")]
    pub original: PathBuf,

    /// The image with the hidden message
    #[arg(value_name = "stego image")]
    pub stego: PathBuf,
}

impl PsnrArgs {
    pub fn run(self) -> CliResult<()> {
        let original = Media::from_file(&self.original)?;
        let stego = Media::from_file(&self.stego)?;

        let psnr = stegoscribe_core::psnr(original.image(), stego.image())?;
        println!("PSNR: {psnr:.2} dB");

        Ok(())
    }
}
