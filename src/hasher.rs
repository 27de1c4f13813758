//! Incremental hashing.

use std::io;

use digest::consts::U32;
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use crate::hash::{absorb_length, digest_bytes, finish};
use crate::{Error, Spritz};

/// The streaming version of `hash`.
///
/// Feeding the message in pieces gives the same digest as hashing it in one go. `Hasher` is also
/// an `io::Write` sink, so a reader can be hashed with `io::copy`.
#[derive(Clone)]
pub struct Hasher {
    /// The state absorbing the message.
    state: Spritz,
    /// The digest length in bytes.
    len: usize,
}

impl Hasher {
    /// Create a hasher producing `bits` bit digests.
    pub fn new(bits: usize) -> Result<Hasher, Error> {
        Ok(Hasher {
            state: Spritz::new(),
            len: digest_bytes(bits)?,
        })
    }

    /// The digest length in bytes.
    pub fn digest_len(&self) -> usize {
        self.len
    }

    /// Absorb the next piece of the message.
    pub fn update(&mut self, bytes: &[u8]) {
        self.state.absorb_many(bytes);
    }

    /// Produce the digest.
    pub fn finalize(self) -> Vec<u8> {
        finish(self.state, self.len)
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Spritz with a fixed 256-bit output, usable through the `digest` traits.
#[derive(Clone, Default)]
pub struct Spritz256 {
    state: Spritz,
}

impl HashMarker for Spritz256 {}

impl OutputSizeUser for Spritz256 {
    type OutputSize = U32;
}

impl Update for Spritz256 {
    fn update(&mut self, data: &[u8]) {
        self.state.absorb_many(data);
    }
}

impl FixedOutput for Spritz256 {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        self.state.absorb_stop();
        absorb_length(&mut self.state, out.len());
        self.state.squeeze_into(out);
    }
}

impl Reset for Spritz256 {
    fn reset(&mut self) {
        *self = Spritz256::default();
    }
}

impl FixedOutputReset for Spritz256 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        self.clone().finalize_into(out);
        Reset::reset(self);
    }
}
