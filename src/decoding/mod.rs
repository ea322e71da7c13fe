//! The decoding module turns archive bits back into symbols by walking a decode tree.
//!
//! Decoding is single threaded and keeps no state between calls, so one tree can serve any
//! number of callers at the same time.
//!
pub mod stream_decoder;
