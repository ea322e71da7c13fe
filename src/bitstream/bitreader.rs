//! BitReader: reads a packed archive one bit at a time.
//!
//! Bits are taken from the most significant end of each byte first. Because the last byte of a
//! packed archive is usually only partly used, the reader stops after an explicit number of bits
//! rather than at the end of the byte slice.
//!

use crate::errors::{HuffError, HuffResult};

const BIT_MASK: u8 = 0xff;

/// Reads bits out of an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    remaining: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a BitReader that will yield exactly `bit_len` bits from `buffer`.
    pub fn new(buffer: &'a [u8], bit_len: usize) -> HuffResult<Self> {
        if bit_len > buffer.len() * 8 {
            return Err(HuffError::invalid(format!(
                "{} bits requested from {} bytes",
                bit_len,
                buffer.len()
            )));
        }
        Ok(Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            remaining: bit_len,
        })
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.remaining -= 1;
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Number of bits still to be read.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}
