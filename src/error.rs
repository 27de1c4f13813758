//! Errors.
//!
//! The automaton itself cannot fail. Everything in here stems from validating digest lengths or
//! from the byte sources feeding the hash.

use std::io;
use std::path::PathBuf;

use crate::hash::MAX_DIGEST_BYTES;

quick_error! {
    /// A Spritz hashing error.
    #[derive(Debug)]
    pub enum Error {
        /// The requested digest length (in bits) is zero, too long, or not a whole number of
        /// bytes.
        BitLength(bits: usize) {
            display("Invalid digest length of {} bits (must be a positive multiple of 8, at most {}).",
                    bits, MAX_DIGEST_BYTES * 8)
            description("Invalid digest length.")
        }
        /// Reading a byte source (or writing output) failed.
        Io(err: io::Error) {
            from()
            cause(err)
            display("I/O error: {}", err)
            description("I/O error.")
        }
        /// An input file (the path) could not be opened.
        Open(path: PathBuf, err: io::Error) {
            cause(err)
            display("Could not open {}: {}", path.display(), err)
            description("Could not open input.")
        }
        /// An input file (the path) failed while being read.
        Read(path: PathBuf, err: io::Error) {
            cause(err)
            display("Could not read {}: {}", path.display(), err)
            description("Could not read input.")
        }
    }
}
