//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::error::Error;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffdecode::decode_with_options;
use huffdecode::tools::cli::Args;

fn main() -> Result<(), Box<dyn Error>> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();
    log::set_max_level(args.verbosity().level_filter());

    let opts = args.decode_options()?;
    let text = decode_with_options(&args.archive, &args.codewords, &opts)?;
    println!("{}", text);

    info!("Done.\n");
    Ok(())
}
