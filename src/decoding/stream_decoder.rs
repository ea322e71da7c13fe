use log::{debug, error, info, trace};

use crate::errors::{HuffError, HuffResult};
use crate::huffman_coding::decode_tree::{DecodeTree, Node};
use crate::tools::options::TrailingBits;

/// Decode a sequence of bits against `tree`.
///
/// Walks down from the root one bit at a time. Every time a leaf is reached its symbol is
/// appended to the output and the walk starts again at the root. A bit that asks for a child
/// that is not there is a MalformedArchive error, and nothing decoded so far is returned.
/// Bits left over at the end (the walk is not back at the root) are handled by `trailing`.
pub fn decode_with_tree<I>(bits: I, tree: &DecodeTree, trailing: TrailingBits) -> HuffResult<String>
where
    I: IntoIterator<Item = bool>,
{
    let root = tree.root();
    let mut current = root;
    let mut result = String::new();
    // Bits consumed since we last left the root
    let mut dangling = 0;
    let mut position = 0;

    for bit in bits {
        current = match current.child(bit) {
            Some(node) => node,
            None => {
                error!(
                    "Badly formed archive or invalid dictionary: no path for bit {}.",
                    position
                );
                return Err(HuffError::MalformedArchive { position });
            }
        };
        position += 1;
        dangling += 1;

        if let Node::Leaf(sym) = current {
            trace!("{} after {} bits", sym, dangling);
            result.push(*sym);
            // Found a leaf, back to the root for the next codeword
            current = root;
            dangling = 0;
        }
    }

    if dangling > 0 {
        match trailing {
            TrailingBits::Reject => {
                error!("Archive ends {} bits into a codeword.", dangling);
                return Err(HuffError::TruncatedArchive { dangling });
            }
            TrailingBits::Drop => {
                debug!("Dropping {} trailing bits.", dangling);
            }
        }
    }

    info!(
        "Decoded {} symbols from {} bits.",
        result.chars().count(),
        position
    );
    Ok(result)
}
