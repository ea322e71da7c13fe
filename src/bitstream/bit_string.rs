use log::error;

use crate::errors::{HuffError, HuffResult};

/// An archive written out as text, one '0' or '1' character per bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitString<'a> {
    text: &'a str,
}

impl<'a> BitString<'a> {
    /// Check that `text` is a non-empty string of '0' and '1' characters.
    pub fn parse(text: &'a str) -> HuffResult<Self> {
        if text.is_empty() {
            error!("Archive is empty.");
            return Err(HuffError::invalid("archive is empty"));
        }
        if let Some((pos, c)) = text.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            error!("Archive holds {:?} at {}.", c, pos);
            return Err(HuffError::invalid(format!(
                "archive has non-binary character {:?} at {}",
                c, pos
            )));
        }
        Ok(Self { text })
    }

    /// Number of bits in the archive.
    pub fn len(&self) -> usize {
        // Only ASCII made it through parse()
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The bits, in order. `true` is a '1'.
    pub fn bits(&self) -> impl Iterator<Item = bool> + 'a {
        let text = self.text;
        text.bytes().map(|b| b == b'1')
    }
}
