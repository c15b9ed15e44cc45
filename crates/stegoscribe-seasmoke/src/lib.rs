//! # Password based encryption
//!
//! Keys are derived with PBKDF2-HMAC-SHA256 from a password and a random salt,
//! data is sealed with XChaCha20Poly1305. The random nonce is stored in front of
//! the cipher text, the salt is left to the caller so it can be framed however
//! the caller likes.

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

pub mod error;

pub use crate::error::SeasmokeError;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 24;
pub const KEY_LEN: usize = 32;
pub const TAG_LEN: usize = 16;
pub const PBKDF2_ROUNDS: u32 = 100_000;

pub type Result<T> = std::result::Result<T, SeasmokeError>;
pub type Salt = [u8; SALT_LEN];
pub type Key = Zeroizing<[u8; KEY_LEN]>;

/// a fresh salt from the operating system rng, never reuse it for a second message
pub fn generate_salt() -> Salt {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// derives a 256 bit key with PBKDF2-HMAC-SHA256 and [`PBKDF2_ROUNDS`] iterations
pub fn derive_key(password: &[u8], salt: &[u8]) -> Key {
    derive_key_with_rounds(password, salt, PBKDF2_ROUNDS)
}

pub fn derive_key_with_rounds(password: &[u8], salt: &[u8], rounds: u32) -> Key {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, rounds, &mut *key);
    key
}

/// encrypt data with password and salt, the result is `nonce ++ cipher text ++ tag`
pub fn encrypt_data(password: &str, salt: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(password.as_bytes(), salt);
    seal(&key, data)
}

/// decrypt data produced by [`encrypt_data`] with the same password and salt
pub fn decrypt_data(password: &str, salt: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let key = derive_key(password.as_bytes(), salt);
    open(&key, data)
}

pub fn seal(key: &Key, data: &[u8]) -> Result<Vec<u8>> {
    let cipher =
        XChaCha20Poly1305::new_from_slice(&key[..]).map_err(|_| SeasmokeError::InvalidKeyLength)?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let cipher_data = cipher
        .encrypt(XNonce::from_slice(&nonce), data)
        .map_err(SeasmokeError::EncryptionError)?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + cipher_data.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&cipher_data);
    nonce.zeroize();

    Ok(sealed)
}

pub fn open(key: &Key, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(SeasmokeError::CipherTextTooShort);
    }
    let (nonce, cipher_data) = data.split_at(NONCE_LEN);

    let cipher =
        XChaCha20Poly1305::new_from_slice(&key[..]).map_err(|_| SeasmokeError::InvalidKeyLength)?;

    cipher
        .decrypt(XNonce::from_slice(nonce), cipher_data)
        .map_err(SeasmokeError::DecryptionError)
}
