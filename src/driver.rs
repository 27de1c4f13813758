//! Hashing files.
//!
//! This is the machinery behind the `spritz` binary. Every input is hashed on its own: an input
//! which cannot be opened or read is logged and skipped, and the rest are still processed.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use slog::Logger;

use crate::hash::{digest_bytes, hash_reader};
use crate::Error;

/// A source of bytes to hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// The standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Input {
    /// Interpret a command-line argument. `-` denotes the standard input.
    pub fn from_arg<P: Into<PathBuf>>(arg: P) -> Input {
        let path = arg.into();
        if path == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }

    /// The name printed in front of the digest.
    pub fn name(&self) -> String {
        match *self {
            Input::Stdin => "-".to_owned(),
            Input::File(ref path) => path.display().to_string(),
        }
    }
}

/// Hash a single input.
pub fn hash_input(log: &Logger, input: &Input, bits: usize) -> Result<Vec<u8>, Error> {
    match *input {
        Input::Stdin => {
            debug!(log, "hashing standard input");

            let stdin = io::stdin();
            let lock = stdin.lock();
            hash_reader(bits, lock)
        },
        Input::File(ref path) => hash_file(log, path, bits),
    }
}

/// Hash the file at `path`.
pub fn hash_file(log: &Logger, path: &Path, bits: usize) -> Result<Vec<u8>, Error> {
    debug!(log, "opening file"; "path" => %path.display());

    let file = File::open(path).map_err(|err| Error::Open(path.to_owned(), err))?;

    trace!(log, "reading file"; "path" => %path.display());

    hash_reader(bits, file).map_err(|err| match err {
        Error::Io(err) => Error::Read(path.to_owned(), err),
        err => err,
    })
}

/// Format a line of output: the input's name followed by the digest in lowercase hex.
pub fn format_line(name: &str, digest: &[u8]) -> String {
    format!("{}: {}", name, hex::encode(digest))
}

/// Hash every input and write a line for each one to `out`.
///
/// The digest length is checked before anything is read. Failing inputs are logged and skipped.
/// This returns the number of inputs which failed, or an error if the length is invalid or `out`
/// cannot be written.
pub fn run<W: Write>(log: &Logger, bits: usize, inputs: &[Input], mut out: W) -> Result<usize, Error> {
    let len = digest_bytes(bits)?;
    info!(log, "hashing inputs"; "inputs" => inputs.len(), "digest_bytes" => len);

    let mut failed = 0;
    for input in inputs {
        let name = input.name();

        match hash_input(log, input, bits) {
            Ok(digest) => {
                debug!(log, "hashed input"; "input" => &name);
                writeln!(out, "{}", format_line(&name, &digest))?;
            },
            Err(err) => {
                error!(log, "skipping input"; "input" => &name, "error" => %err);
                failed += 1;
            },
        }
    }

    out.flush()?;

    if failed > 0 {
        warn!(log, "some inputs could not be hashed"; "failed" => failed);
    }

    Ok(failed)
}
