pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeasmokeError {
    #[error("Invalid key length")]
    InvalidKeyLength,

    #[error("Cipher text is too short")]
    CipherTextTooShort,

    #[error("Decryption error")]
    DecryptionError(Chacha20Poly1305Error),

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),
}
