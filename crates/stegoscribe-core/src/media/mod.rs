pub mod codec_options;
pub mod image;
pub mod payload;
mod primitives;
mod types;

use std::path::{Path, PathBuf};

pub use codec_options::{ColorChannel, CodecOptions, DctCodecOptions, DEFAULT_DCT_STEP};
pub use payload::Unveiled;
pub use primitives::*;
pub use types::*;

pub trait Persist {
    /// persists to the given file, returns the path that was actually written
    fn save_as(&self, _: &Path) -> crate::Result<PathBuf>;
}
