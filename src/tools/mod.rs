//! The tools module provides the helpers around the decoder.
//!
//! The tools are:
//! - cli: Command line interface.
//! - options: Decoding policies and the alphabet.
//!
pub mod cli;
pub mod options;
