use clap::{Args, Parser, Subcommand, ValueEnum};
use stegoscribe_core::{
    CodecOptions, ColorChannel, DctCodecOptions, StegoError, DEFAULT_DCT_STEP,
};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(flatten)]
    pub codec: CodecArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Psnr(psnr::PsnrArgs),
    Capacity(capacity::CapacityArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// one bit in the lowest bit of every color channel
    #[default]
    Lsb,
    /// one bit per 8x8 block in a mid frequency DCT coefficient
    Dct,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl From<Channel> for ColorChannel {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Red => ColorChannel::Red,
            Channel::Green => ColorChannel::Green,
            Channel::Blue => ColorChannel::Blue,
        }
    }
}

/// Codec options, the same have to be used for hiding and unveiling
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Steganography method
    #[arg(long, value_enum, default_value_t = Method::Lsb, global = true)]
    pub method: Method,

    /// DCT only: quantization step of the carrier coefficient
    #[arg(
        long,
        value_name = "step",
        default_value_t = DEFAULT_DCT_STEP,
        value_parser = positive_step,
        global = true
    )]
    pub step: f64,

    /// DCT only: color channel that carries the data
    #[arg(long, value_enum, default_value_t = Channel::Blue, global = true)]
    pub channel: Channel,
}

impl CodecArgs {
    pub fn options(&self) -> CodecOptions {
        match self.method {
            Method::Lsb => CodecOptions::Lsb,
            Method::Dct => CodecOptions::Dct(
                DctCodecOptions::default()
                    .with_step(self.step)
                    .with_carrier(self.channel.into()),
            ),
        }
    }
}

fn positive_step(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(step) if step.is_finite() && step > 0.0 => Ok(step),
        _ => Err(format!("`{s}` is not a positive number")),
    }
}

pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt.interact().ok()
}

pub fn ask_for_message() -> Option<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Message")
        .interact_text()
        .ok()
}

/// the single line printed when a command fails
pub fn failure_message(e: &StegoError) -> String {
    match e {
        StegoError::DecryptionFailure
        | StegoError::MalformedEnvelope
        | StegoError::UnterminatedPayload(_) => {
            "Nothing unveiled: wrong password or corrupted image".to_string()
        }
        e => format!("Error: {e}"),
    }
}
