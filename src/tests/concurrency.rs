use std::thread;

use crate::decoding::stream_decoder::decode_with_tree;
use crate::huffman_coding::decode_tree::DecodeTree;
use crate::tools::options::{DecodeOptions, TrailingBits};

fn bits(s: &str) -> Vec<bool> {
    s.chars().map(|c| c == '1').collect()
}

#[test]
fn test_shared_tree_across_threads() {
    let tree = DecodeTree::build(&["0", "10", "11"], &DecodeOptions::new()).unwrap();
    let archives = ["0100", "1110010", "000", "11"];
    let expected = ["ABA", "CBAB", "AAA", "C"];

    thread::scope(|s| {
        let handles: Vec<_> = archives
            .iter()
            .map(|archive| {
                let tree = &tree;
                s.spawn(move || decode_with_tree(bits(archive), tree, TrailingBits::Reject))
            })
            .collect();
        for (handle, want) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), Ok(want.to_string()));
        }
    });

    // Decoding never changes the tree
    assert_eq!(
        tree,
        DecodeTree::build(&["0", "10", "11"], &DecodeOptions::new()).unwrap()
    );
}
