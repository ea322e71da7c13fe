use std::{fmt::Display, fmt::Formatter};

use crate::huffman_coding::alphabet::Alphabet;

/// What to do when two codewords collide during tree construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Fail with DuplicateCodeword / PrefixConflict
    Reject,
    /// Keep whichever entry got there first and skip the later one
    FirstWins,
}
impl Display for CollisionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What to do when the archive ends part way down a codeword
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingBits {
    /// Fail with TruncatedArchive
    Reject,
    /// Return what was decoded and ignore the dangling bits
    Drop,
}
impl Display for TrailingBits {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define all user settable options that control decoding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Symbols assigned to the table entries, in order
    pub alphabet: Alphabet,
    /// Handling of duplicate or prefix-colliding codewords
    pub collisions: CollisionPolicy,
    /// Handling of an archive that stops mid-codeword
    pub trailing: TrailingBits,
}

impl DecodeOptions {
    /// Strict defaults over the uppercase alphabet.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::uppercase(),
            collisions: CollisionPolicy::Reject,
            trailing: TrailingBits::Reject,
        }
    }

    /// First-wins collisions and silently dropped trailing bits.
    pub fn lenient() -> Self {
        Self::new()
            .with_collisions(CollisionPolicy::FirstWins)
            .with_trailing(TrailingBits::Drop)
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_collisions(mut self, collisions: CollisionPolicy) -> Self {
        self.collisions = collisions;
        self
    }

    pub fn with_trailing(mut self, trailing: TrailingBits) -> Self {
        self.trailing = trailing;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
