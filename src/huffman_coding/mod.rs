//! The huffman_coding module rebuilds a prefix-code decode tree from a table of codewords.
//!
//! A prefix code assigns each symbol a string of bits such that no symbol's bits are the start of
//! another symbol's bits. That property lets a decoder find codeword boundaries in a stream
//! without separators, by walking a binary tree until it reaches a leaf.
//!
//! Building the tree happens in three steps:
//! - alphabet: the ordered symbols. Table entry i belongs to symbol i.
//! - code_table: validate the codewords, pair them with their symbols and sort by codeword.
//! - decode_tree: insert each codeword into one shared tree, one node per bit.
//!
pub mod alphabet;
pub mod code_table;
pub mod decode_tree;
