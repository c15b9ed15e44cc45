use thiserror::Error;

pub use stegoscribe_seasmoke::SeasmokeError;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a payload character that does not fit into a single byte
    #[error("Character {0:?} cannot be encoded as a single byte")]
    UnsupportedCharacter(char),

    /// Represents a payload that does not fit into the carrier, nothing was written
    #[error(
        "Capacity Error: The payload requires {required} bits but the carrier only offers {available} bits"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// Represents two images that cannot be compared because their sizes differ
    #[error("Dimension mismatch: {left_width}x{left_height} vs. {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    /// Represents a DCT quantization step that is zero, negative or not finite
    #[error("Invalid DCT quantization step {0}, it has to be a positive finite number")]
    InvalidStep(f64),

    /// Represents a structurally broken envelope, for example broken base64 or a missing separator
    #[error("The envelope is malformed")]
    MalformedEnvelope,

    /// Represents a well formed envelope that could not be opened, wrong password or corrupted data
    #[error("Decryption failed, wrong password or corrupted data")]
    DecryptionFailure,

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(SeasmokeError),

    /// Represents a carrier without any termination marker, the text is a diagnostic excerpt only
    #[error("No hidden payload found, the carrier was probably encoded with another method")]
    UnterminatedPayload(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}
