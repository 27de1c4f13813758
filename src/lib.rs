//! Spritz: a spongy RC4-like stream cipher and hash function.
//!
//! Spritz (Rivest & Schuldt, 2014) is a sponge built around a single automaton: a permutation of
//! the bytes `0..256` plus six one-byte registers. Input is absorbed into the permutation a nibble
//! at a time, and output is squeezed out of it one byte at a time. The same automaton gives a
//! hash function, a pseudo-random generator and (not implemented here) a stream cipher.
//!
//! # Hashing
//!
//! ```
//! let digest = spritz::hash(256, b"ABC").unwrap();
//! assert_eq!(&digest[..4], &[0x02u8, 0x8f, 0xa2, 0xb4]);
//! ```
//!
//! The digest length is absorbed after the message, so digests of different lengths over the
//! same message are unrelated. Only whole bytes can be requested.
//!
//! # Using the automaton directly
//!
//! ```
//! use spritz::Spritz;
//!
//! let mut state = Spritz::new();
//! state.absorb_many(b"seed");
//! let bytes: Vec<u8> = state.squeeze_many(16).collect();
//! assert_eq!(bytes.len(), 16);
//! ```
//!
//! Everything here is sequential. A state is cheap to create and holds no resources, so
//! independent computations should simply use independent states.

#![warn(missing_docs)]

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate slog;

pub mod driver;
mod error;
pub mod hash;
mod hasher;
mod state;

pub use crate::error::Error;
pub use crate::hash::{hash, hash256, hash_reader};
pub use crate::hasher::{Hasher, Spritz256};
pub use crate::state::{Spritz, Squeeze};
