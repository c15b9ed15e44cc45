//! Framing of extracted payloads.
//!
//! Channels carry no length field, an extraction reads until the
//! [`END_MARKER`] shows up. A carrier without a marker yields an
//! [`Unveiled::Unterminated`] outcome, which is never a valid payload.

use crate::envelope::END_MARKER;
use crate::error::StegoError;
use crate::result::Result;

/// number of characters kept as diagnostic excerpt of an unterminated DCT extraction
pub const DIAGNOSTIC_EXCERPT_LEN: usize = 50;

/// the outcome of reading a payload out of a carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unveiled {
    /// the marker was found, holds the payload
    Terminated(String),
    /// no marker in the whole carrier, holds best-effort garbage for diagnostics only
    Unterminated(String),
}

impl Unveiled {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Unveiled::Terminated(_))
    }

    /// the payload, only if the marker was found
    pub fn payload(&self) -> Option<&str> {
        match self {
            Unveiled::Terminated(payload) => Some(payload),
            Unveiled::Unterminated(_) => None,
        }
    }

    pub fn into_payload(self) -> Result<String> {
        match self {
            Unveiled::Terminated(payload) => Ok(payload),
            Unveiled::Unterminated(garbage) => Err(StegoError::UnterminatedPayload(garbage)),
        }
    }
}

/// accumulates extracted bytes as characters until the marker completes
#[derive(Debug, Default)]
pub(crate) struct PayloadScanner {
    text: String,
}

impl PayloadScanner {
    /// returns true as soon as the text ends with the marker
    pub fn push(&mut self, byte: u8) -> bool {
        self.text.push(char::from(byte));
        self.text.ends_with(END_MARKER)
    }

    /// scans until the marker, consuming only as many bytes as needed
    pub fn scan(mut self, bytes: impl Iterator<Item = u8>) -> (bool, String) {
        for byte in bytes {
            if self.push(byte) {
                return (true, self.text);
            }
        }
        (false, self.text)
    }
}

/// shortens garbage to a diagnostic excerpt
pub(crate) fn excerpt(garbage: &str) -> String {
    let mut excerpt: String = garbage.chars().take(DIAGNOSTIC_EXCERPT_LEN).collect();
    excerpt.push_str("...");
    excerpt
}
