//! The bitstream module supplies archive bits to the decoder.
//!
//! An archive can arrive in two shapes:
//! - bit_string: text made of '0' and '1' characters.
//! - bitreader: packed bytes, most significant bit first, with an explicit bit count.
//!
//! Both are in-memory only.
//!
pub mod bit_string;
pub mod bitreader;
