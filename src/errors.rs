use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Everything that can go wrong while building a decode tree or decoding an archive.
/// All of these indicate bad input (a malformed table or a corrupt archive), never a system fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HuffError {
    /// Missing, empty or otherwise unusable input. Reported before any work is done.
    InvalidArgument { reason: String },
    /// Two table entries share the same codeword.
    DuplicateCodeword {
        codeword: String,
        first: char,
        second: char,
    },
    /// A codeword is a prefix of another codeword in the table (or the other way around).
    PrefixConflict { codeword: String, symbol: char },
    /// The archive asked for a tree edge that does not exist.
    MalformedArchive { position: usize },
    /// The archive ended part way down a codeword.
    TruncatedArchive { dangling: usize },
}

pub type HuffResult<T> = Result<T, HuffError>;

impl HuffError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        HuffError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl Display for HuffError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HuffError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            HuffError::DuplicateCodeword {
                codeword,
                first,
                second,
            } => write!(
                f,
                "codeword {} is assigned to both {} and {}",
                codeword, first, second
            ),
            HuffError::PrefixConflict { codeword, symbol } => write!(
                f,
                "codeword {} for symbol {} collides with a prefix of another codeword",
                codeword, symbol
            ),
            HuffError::MalformedArchive { position } => write!(
                f,
                "badly formed archive or invalid dictionary: no path for bit {}",
                position
            ),
            HuffError::TruncatedArchive { dangling } => write!(
                f,
                "archive ends in the middle of a codeword ({} trailing bits)",
                dangling
            ),
        }
    }
}

impl Error for HuffError {}
