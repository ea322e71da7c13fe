use clap::Parser;
use log::{info, LevelFilter};

use crate::errors::HuffResult;
use crate::huffman_coding::alphabet::Alphabet;
use crate::tools::options::{CollisionPolicy, DecodeOptions, TrailingBits};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Decode a prefix-code archive using a table of codewords",
    long_about = "
    Each CODEWORD is the bit string of one symbol: the first codeword belongs to the first
    symbol of the alphabet (A unless --alphabet is given), the second to the second, and so on.
    ARCHIVE is the concatenation of codewords to decode, written as '0' and '1' characters."
)]
pub struct Args {
    /// Encoded bits, e.g. 0100
    #[clap()]
    pub archive: String,

    /// Bit string of each symbol, in alphabet order
    #[clap(required = true)]
    pub codewords: Vec<String>,

    /// Symbols to assign to the codewords, in order
    #[clap(short = 'a', long = "alphabet")]
    pub alphabet: Option<String>,

    /// Keep the first of two colliding codewords instead of failing
    #[clap(long = "first-wins")]
    pub first_wins: bool,

    /// Ignore bits left over after the last complete codeword
    #[clap(long = "drop-trailing")]
    pub drop_trailing: bool,

    /// Shorthand for --first-wins --drop-trailing
    #[clap(long = "lenient")]
    pub lenient: bool,

    /// Sets verbosity. -v shows errors, -vvvvv is chatty
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    pub verbose: u8,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 | 1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// Put command line information into our decode options.
    pub fn decode_options(&self) -> HuffResult<DecodeOptions> {
        let mut opts = DecodeOptions::new();
        if let Some(symbols) = &self.alphabet {
            opts = opts.with_alphabet(Alphabet::new(symbols.chars())?);
        }
        if self.first_wins || self.lenient {
            opts = opts.with_collisions(CollisionPolicy::FirstWins);
        }
        if self.drop_trailing || self.lenient {
            opts = opts.with_trailing(TrailingBits::Drop);
        }

        info!("---- Decoder Initialization ----");
        info!("Verbosity set to {}", log::max_level());
        info!("Alphabet has {} symbols", opts.alphabet.len());
        info!("Collision policy set to {}", opts.collisions);
        info!("Trailing bit policy set to {}", opts.trailing);
        Ok(opts)
    }
}
