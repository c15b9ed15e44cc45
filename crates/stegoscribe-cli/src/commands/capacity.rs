use std::path::PathBuf;

use clap::Args;
use stegoscribe_core::{ChannelCodec, Codec, CodecOptions, DctCodecOptions, Media};

use crate::CliResult;

/// Shows how much a carrier image can hold with either method
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image such as PNG or JPEG
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let media = Media::from_file(&self.media)?;
        let image = media.image();
        let dct_options = match options {
            CodecOptions::Dct(dct) => dct,
            CodecOptions::Lsb => DctCodecOptions::default(),
        };

        println!("{}x{} pixels", image.width(), image.height());
        for (name, codec) in [
            ("LSB", Codec::try_from(CodecOptions::Lsb)?),
            ("DCT", Codec::try_from(CodecOptions::Dct(dct_options))?),
        ] {
            println!(
                "{name}: {} bits, {} characters including the end marker",
                codec.capacity(image),
                codec.capacity_bytes(image)
            );
        }

        Ok(())
    }
}
