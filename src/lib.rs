//! Prefix-code (Huffman style) decoder.
//!
//! Rebuilds a decode tree from a table of codewords, then uses it to turn an archive of
//! concatenated codewords back into symbols. The i-th codeword belongs to the i-th symbol of
//! the alphabet, which is the uppercase letters A-Z unless another alphabet is supplied.
//!
//! There is no encoder and no file handling. Callers supply a ready-made code table and the
//! archive in memory.
//!
//! Basic usage:
//!
//! ```
//! let text = huffdecode::decode("0100", &["0", "10", "11"]).unwrap();
//! assert_eq!(text, "ABA");
//! ```
//!
//! By default a table with duplicate or prefix-colliding codewords is rejected, and so is an
//! archive that ends in the middle of a codeword. See `DecodeOptions` for the lenient policies.
//!
pub mod bitstream;
pub mod decoding;
pub mod errors;
pub mod huffman_coding;
pub mod tools;

#[cfg(test)]
mod tests;

use log::info;

pub use errors::{HuffError, HuffResult};
pub use huffman_coding::alphabet::Alphabet;
pub use huffman_coding::decode_tree::DecodeTree;
pub use tools::options::{CollisionPolicy, DecodeOptions, TrailingBits};

use bitstream::{bit_string::BitString, bitreader::BitReader};
use decoding::stream_decoder::decode_with_tree;

/// Decode `archive`, a string of '0' and '1', where `codewords[i]` is the bit string of the
/// i-th uppercase letter. Uses the strict default options.
pub fn decode<S: AsRef<str>>(archive: &str, codewords: &[S]) -> HuffResult<String> {
    decode_with_options(archive, codewords, &DecodeOptions::default())
}

/// Decode a '0'/'1' archive with an explicit alphabet and policies.
pub fn decode_with_options<S: AsRef<str>>(
    archive: &str,
    codewords: &[S],
    opts: &DecodeOptions,
) -> HuffResult<String> {
    // Check the inputs before doing any work
    let archive = BitString::parse(archive)?;
    let tree = DecodeTree::build(codewords, opts)?;
    info!("Decoding a {} bit archive.", archive.len());
    decode_with_tree(archive.bits(), &tree, opts.trailing)
}

/// Decode the first `bit_len` bits of a packed (most significant bit first) archive.
pub fn decode_packed<S: AsRef<str>>(
    bytes: &[u8],
    bit_len: usize,
    codewords: &[S],
    opts: &DecodeOptions,
) -> HuffResult<String> {
    if bit_len == 0 {
        return Err(HuffError::invalid("archive is empty"));
    }
    let reader = BitReader::new(bytes, bit_len)?;
    let tree = DecodeTree::build(codewords, opts)?;
    info!("Decoding a packed archive of {} bits.", reader.remaining());
    decode_with_tree(reader, &tree, opts.trailing)
}
