//! # Crypto Envelope
//!
//! Turns a plain text message into the text that is hidden inside of an image:
//!
//! ```text
//! base64url( salt[16] ++ "::" ++ nonce[24] ++ cipher text ++ tag[16] ) ++ "-----EOF-----"
//! ```
//!
//! The trailing marker lives outside of the base64 encoding, it is what the
//! channel codecs look for to find the end of the payload.
//!
//! ```rust
//! let sealed = stegoscribe_core::envelope::encrypt("Hello World!", "Secret42").unwrap();
//! assert!(sealed.ends_with(stegoscribe_core::END_MARKER));
//!
//! let message = stegoscribe_core::envelope::decrypt(&sealed, "Secret42").unwrap();
//! assert_eq!(message, "Hello World!");
//! ```

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use log::debug;
use stegoscribe_seasmoke::{Salt, SeasmokeError, SALT_LEN};

use crate::error::StegoError;
use crate::result::Result;

/// terminates every payload, shared by the envelope and all channel codecs
pub const END_MARKER: &str = "-----EOF-----";

const SEPARATOR: &[u8] = b"::";

/// the key derivation and authenticated encryption an envelope relies on
pub trait PasswordCipher: Debug {
    fn generate_salt(&self) -> Salt;

    fn encrypt(
        &self,
        password: &str,
        salt: &Salt,
        plaintext: &[u8],
    ) -> std::result::Result<Vec<u8>, SeasmokeError>;

    fn decrypt(
        &self,
        password: &str,
        salt: &Salt,
        ciphertext: &[u8],
    ) -> std::result::Result<Vec<u8>, SeasmokeError>;
}

/// PBKDF2-HMAC-SHA256 with XChaCha20Poly1305, provided by `stegoscribe-seasmoke`
#[derive(Debug, Default, Clone, Copy)]
pub struct Seasmoke;

impl PasswordCipher for Seasmoke {
    fn generate_salt(&self) -> Salt {
        stegoscribe_seasmoke::generate_salt()
    }

    fn encrypt(
        &self,
        password: &str,
        salt: &Salt,
        plaintext: &[u8],
    ) -> std::result::Result<Vec<u8>, SeasmokeError> {
        stegoscribe_seasmoke::encrypt_data(password, salt, plaintext)
    }

    fn decrypt(
        &self,
        password: &str,
        salt: &Salt,
        ciphertext: &[u8],
    ) -> std::result::Result<Vec<u8>, SeasmokeError> {
        stegoscribe_seasmoke::decrypt_data(password, salt, ciphertext)
    }
}

/// a sealed message, salt and cipher text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    salt: Salt,
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn seal(cipher: &dyn PasswordCipher, message: &str, password: &str) -> Result<Self> {
        let salt = cipher.generate_salt();
        let ciphertext = cipher
            .encrypt(password, &salt, message.as_bytes())
            .map_err(StegoError::EncryptionError)?;

        Ok(Self { salt, ciphertext })
    }

    pub fn open(&self, cipher: &dyn PasswordCipher, password: &str) -> Result<String> {
        let plaintext = cipher
            .decrypt(password, &self.salt, &self.ciphertext)
            .map_err(|e| match e {
                SeasmokeError::CipherTextTooShort => StegoError::MalformedEnvelope,
                _ => StegoError::DecryptionFailure,
            })?;

        String::from_utf8(plaintext).map_err(|_| StegoError::DecryptionFailure)
    }
}

impl Display for Envelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut framed = Vec::with_capacity(SALT_LEN + SEPARATOR.len() + self.ciphertext.len());
        framed.extend_from_slice(&self.salt);
        framed.extend_from_slice(SEPARATOR);
        framed.extend_from_slice(&self.ciphertext);

        write!(f, "{}{}", URL_SAFE.encode(framed), END_MARKER)
    }
}

impl FromStr for Envelope {
    type Err = StegoError;

    /// the marker is optional, the DCT channel hands out payloads without it
    fn from_str(serialized: &str) -> Result<Self> {
        let encoded = serialized.strip_suffix(END_MARKER).unwrap_or(serialized);
        let framed = URL_SAFE
            .decode(encoded)
            .map_err(|_| StegoError::MalformedEnvelope)?;

        if framed.len() < SALT_LEN + SEPARATOR.len() {
            return Err(StegoError::MalformedEnvelope);
        }
        let (salt, rest) = framed.split_at(SALT_LEN);
        let Some(ciphertext) = rest.strip_prefix(SEPARATOR) else {
            return Err(StegoError::MalformedEnvelope);
        };
        let salt = Salt::try_from(salt).map_err(|_| StegoError::MalformedEnvelope)?;

        Ok(Self {
            salt,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

/// seals and opens envelopes with an injected [`PasswordCipher`]
#[derive(Debug)]
pub struct CryptoEnvelope {
    cipher: Box<dyn PasswordCipher>,
}

impl Default for CryptoEnvelope {
    fn default() -> Self {
        Self::new(Seasmoke)
    }
}

impl CryptoEnvelope {
    pub fn new(cipher: impl PasswordCipher + 'static) -> Self {
        Self {
            cipher: Box::new(cipher),
        }
    }

    pub fn encrypt(&self, message: &str, password: &str) -> Result<String> {
        let envelope = Envelope::seal(&*self.cipher, message, password)?;
        debug!(
            "sealed {} bytes of message into {} bytes of cipher text",
            message.len(),
            envelope.ciphertext.len()
        );

        Ok(envelope.to_string())
    }

    /// any failure is either [`StegoError::MalformedEnvelope`] or [`StegoError::DecryptionFailure`]
    pub fn decrypt(&self, serialized: &str, password: &str) -> Result<String> {
        serialized
            .parse::<Envelope>()?
            .open(&*self.cipher, password)
    }
}

/// encrypt a message with the default cipher
pub fn encrypt(message: &str, password: &str) -> Result<String> {
    CryptoEnvelope::default().encrypt(message, password)
}

/// decrypt a serialized envelope with the default cipher
pub fn decrypt(serialized: &str, password: &str) -> Result<String> {
    CryptoEnvelope::default().decrypt(serialized, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// xor "cipher" without key derivation, keeps the framing tests fast
    #[derive(Debug)]
    struct XorCipher;

    impl PasswordCipher for XorCipher {
        fn generate_salt(&self) -> Salt {
            *b"0123456789abcdef"
        }

        fn encrypt(
            &self,
            password: &str,
            _salt: &Salt,
            plaintext: &[u8],
        ) -> std::result::Result<Vec<u8>, SeasmokeError> {
            let key = password.as_bytes();
            Ok(plaintext
                .iter()
                .enumerate()
                .map(|(i, b)| b ^ key[i % key.len()])
                .collect())
        }

        fn decrypt(
            &self,
            password: &str,
            salt: &Salt,
            ciphertext: &[u8],
        ) -> std::result::Result<Vec<u8>, SeasmokeError> {
            self.encrypt(password, salt, ciphertext)
        }
    }

    #[test]
    fn should_frame_salt_separator_and_marker() {
        let sealed = CryptoEnvelope::new(XorCipher).encrypt("abc", "k").unwrap();
        let encoded = sealed.strip_suffix(END_MARKER).unwrap();
        let framed = URL_SAFE.decode(encoded).unwrap();

        assert_eq!(&framed[..SALT_LEN], b"0123456789abcdef");
        assert_eq!(&framed[SALT_LEN..SALT_LEN + 2], b"::");
        assert_eq!(&framed[SALT_LEN + 2..], &[b'a' ^ b'k', b'b' ^ b'k', b'c' ^ b'k']);
    }

    #[test]
    fn should_parse_with_and_without_marker() {
        let sealed = CryptoEnvelope::new(XorCipher).encrypt("abc", "k").unwrap();
        let without_marker = sealed.strip_suffix(END_MARKER).unwrap();

        assert_eq!(
            sealed.parse::<Envelope>().unwrap(),
            without_marker.parse::<Envelope>().unwrap()
        );
    }

    #[test]
    fn should_split_at_the_salt_boundary() {
        // a salt containing the separator must not shift the split
        let mut framed = b"ab::cdefghijklmn".to_vec();
        framed.extend_from_slice(b"::payload");
        let serialized = format!("{}{}", URL_SAFE.encode(&framed), END_MARKER);

        let envelope: Envelope = serialized.parse().unwrap();
        assert_eq!(envelope.salt(), b"ab::cdefghijklmn");
        assert_eq!(envelope.ciphertext(), b"payload");
    }

    #[test]
    fn should_reject_broken_base64() {
        assert!(matches!(
            "not base64 at all!".parse::<Envelope>(),
            Err(StegoError::MalformedEnvelope)
        ));
    }

    #[test]
    fn should_reject_missing_separator() {
        let serialized = URL_SAFE.encode([7u8; 40]);
        assert!(matches!(
            serialized.parse::<Envelope>(),
            Err(StegoError::MalformedEnvelope)
        ));
    }

    #[test]
    fn should_reject_too_short_input() {
        let serialized = URL_SAFE.encode(b"short");
        assert!(matches!(
            serialized.parse::<Envelope>(),
            Err(StegoError::MalformedEnvelope)
        ));
    }

    #[test]
    fn should_report_non_utf8_plaintext_as_decryption_failure() {
        let envelope = Envelope {
            salt: *b"0123456789abcdef",
            ciphertext: vec![0xff ^ b'k', 0xfe ^ b'k'],
        };

        assert!(matches!(
            envelope.open(&XorCipher, "k"),
            Err(StegoError::DecryptionFailure)
        ));
    }
}
