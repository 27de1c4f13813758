#[macro_use]
extern crate slog;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use slog::{Drain, Level, Logger};

use spritz::driver::{self, Input};

/// spritz - print Spritz digests of files.
///
/// With no files, or when a file is `-`, the standard input is hashed.
#[derive(Debug, Parser)]
#[command(name = "spritz", version)]
struct Args {
    /// The digest size in bits. Must be a positive multiple of 8.
    #[arg(short, long, default_value_t = 256)]
    size: usize,
    /// Log what is being hashed.
    #[arg(short, long)]
    verbose: bool,
    /// The files to hash.
    files: Vec<PathBuf>,
}

/// Build the root logger, writing to stderr.
fn logger(verbose: bool) -> Logger {
    let level = if verbose { Level::Debug } else { Level::Info };

    let decorator = slog_term::PlainSyncDecorator::new(io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();

    Logger::root(drain, o!())
}

fn main() {
    let args = Args::parse();
    let log = logger(args.verbose);

    let inputs: Vec<Input> = if args.files.is_empty() {
        vec![Input::Stdin]
    } else {
        args.files.into_iter().map(Input::from_arg).collect()
    };

    // Get and lock stdout.
    let stdout = io::stdout();
    let stdout = stdout.lock();

    match driver::run(&log, args.size, &inputs, stdout) {
        Ok(0) => {},
        Ok(_) => process::exit(1),
        Err(err) => {
            crit!(log, "{}", err);
            process::exit(2);
        },
    }
}
