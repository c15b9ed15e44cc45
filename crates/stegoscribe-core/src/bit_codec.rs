//! Conversion between payload text and the bit stream the channels carry.
//!
//! Every character is one byte, bits are ordered most significant first.

use std::io::{Cursor, Read};

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::error::StegoError;
use crate::result::Result;

/// iterates the bits of a byte source, most significant bit of each byte first
pub struct BitIterator<R: Read> {
    reader: BitReader<R, BigEndian>,
}

impl<R: Read> BitIterator<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::endian(source, BigEndian),
        }
    }
}

impl<R: Read> Iterator for BitIterator<R> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_bit().ok()
    }
}

/// assembles bytes from 8 consecutive bits, a trailing group of less than 8 bits is dropped
pub struct ByteAssembler<I> {
    bits: I,
}

impl<I> ByteAssembler<I>
where
    I: Iterator<Item = bool>,
{
    pub fn new(bits: I) -> Self {
        Self { bits }
    }
}

impl<I> Iterator for ByteAssembler<I>
where
    I: Iterator<Item = bool>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | u8::from(self.bits.next()?);
        }
        Some(byte)
    }
}

pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    BitIterator::new(Cursor::new(bytes)).collect()
}

pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    ByteAssembler::new(bits.iter().copied()).collect()
}

/// turns text into bits, fails for characters that do not fit into one byte
pub fn to_bits(text: &str) -> Result<Vec<bool>> {
    let bytes = text
        .chars()
        .map(|c| u8::try_from(c).map_err(|_| StegoError::UnsupportedCharacter(c)))
        .collect::<Result<Vec<u8>>>()?;

    Ok(bytes_to_bits(&bytes))
}

/// turns bits back into text, one character per whole byte
pub fn from_bits(bits: &[bool]) -> String {
    bits_to_bytes(bits).into_iter().map(char::from).collect()
}
