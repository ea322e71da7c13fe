use log::error;
use rustc_hash::FxHashSet;

use crate::errors::{HuffError, HuffResult};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of symbols. Table entry i decodes to `alphabet[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from an ordered list of distinct symbols.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> HuffResult<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            error!("Alphabet must hold at least one symbol.");
            return Err(HuffError::invalid("alphabet is empty"));
        }
        let mut seen = FxHashSet::default();
        for &sym in &symbols {
            if !seen.insert(sym) {
                error!("Symbol {} appears twice in the alphabet.", sym);
                return Err(HuffError::invalid(format!(
                    "alphabet repeats symbol {}",
                    sym
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// The 26 uppercase ASCII letters, A through Z.
    pub fn uppercase() -> Self {
        Self {
            symbols: UPPERCASE.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at position `idx`, if the alphabet is that long.
    pub fn get(&self, idx: usize) -> Option<char> {
        self.symbols.get(idx).copied()
    }

    /// Position of `sym` in the alphabet.
    #[cfg(test)]
    pub(crate) fn position(&self, sym: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == sym)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::uppercase()
    }
}
