//! Hashing with Spritz.
//!
//! A Spritz digest absorbs the message, a stop marker and then the digest length, and squeezes
//! that many bytes. Absorbing the length means that a shorter digest is not a prefix of a longer
//! one over the same message.

use std::io::{self, Read};

use byteorder::{BigEndian, ByteOrder};

use crate::{Error, Spritz};

/// The size of the read buffer used when hashing a byte source.
const BUFFER_SIZE: usize = 4096;
/// The longest digest, in bytes, which can be requested.
pub const MAX_DIGEST_BYTES: usize = 1 << 16;

/// Convert a digest length in bits to bytes.
///
/// Only positive whole numbers of bytes, up to `MAX_DIGEST_BYTES`, are accepted. Rounding up would
/// silently hand out a longer digest than asked for.
pub fn digest_bytes(bits: usize) -> Result<usize, Error> {
    if bits == 0 || bits % 8 != 0 || bits / 8 > MAX_DIGEST_BYTES {
        Err(Error::BitLength(bits))
    } else {
        Ok(bits / 8)
    }
}

/// Absorb the digest length.
///
/// The length is absorbed as big-endian bytes without leading zeros, so any length below 256 is
/// a single byte.
pub fn absorb_length(state: &mut Spritz, len: usize) {
    let mut buf = [0; 8];
    BigEndian::write_u64(&mut buf, len as u64);

    // Always keep the last byte, so zero is still absorbed as a byte.
    let skip = buf[..7].iter().take_while(|&&b| b == 0).count();
    state.absorb_many(&buf[skip..]);
}

/// Squeeze a `len` byte digest out of a state holding the whole message.
pub(crate) fn finish(mut state: Spritz, len: usize) -> Vec<u8> {
    state.absorb_stop();
    absorb_length(&mut state, len);

    state.squeeze_many(len).collect()
}

/// Hash `input` into a digest of `bits` bits.
pub fn hash(bits: usize, input: &[u8]) -> Result<Vec<u8>, Error> {
    let len = digest_bytes(bits)?;

    let mut state = Spritz::new();
    state.absorb_many(input);

    Ok(finish(state, len))
}

/// Hash `input` into a 256-bit digest.
pub fn hash256(input: &[u8]) -> [u8; 32] {
    let mut state = Spritz::new();
    state.absorb_many(input);
    state.absorb_stop();
    absorb_length(&mut state, 32);

    let mut ret = [0; 32];
    state.squeeze_into(&mut ret);
    ret
}

/// Hash everything read from `reader` into a digest of `bits` bits.
///
/// The reader is drained until it reports end-of-stream. Read errors are returned as is, except
/// for interruptions, which are retried.
pub fn hash_reader<R: Read>(bits: usize, mut reader: R) -> Result<Vec<u8>, Error> {
    let len = digest_bytes(bits)?;

    let mut state = Spritz::new();
    let mut buf = [0; BUFFER_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => state.absorb_many(&buf[..n]),
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(Error::Io(err)),
        }
    }

    Ok(finish(state, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    /// A reader which fails after handing out some bytes.
    struct Broken {
        left: usize,
    }

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.left == 0 {
                Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
            } else {
                let n = self.left.min(buf.len());
                for b in &mut buf[..n] {
                    *b = 0xAA;
                }
                self.left -= n;
                Ok(n)
            }
        }
    }

    /// A reader which is interrupted before every chunk.
    struct Interrupting<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl<'a> Read for Interrupting<'a> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
            }

            // Hand out at most three bytes at a time.
            let n = self.data.len().min(buf.len()).min(3);
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn bit_lengths() {
        assert_eq!(digest_bytes(256).unwrap(), 32);
        assert_eq!(digest_bytes(8).unwrap(), 1);
        assert_eq!(digest_bytes(2048).unwrap(), 256);

        assert_eq!(digest_bytes(MAX_DIGEST_BYTES * 8).unwrap(), MAX_DIGEST_BYTES);

        let huge = usize::MAX & !7;
        for &bits in &[0, 1, 7, 9, 255, 257, MAX_DIGEST_BYTES * 8 + 8, huge] {
            match digest_bytes(bits) {
                Err(Error::BitLength(b)) => assert_eq!(b, bits),
                _ => panic!("{} bits should be rejected", bits),
            }
            assert!(hash(bits, b"x").is_err());
            assert!(hash_reader(bits, Cursor::new(b"x")).is_err());
        }
    }

    #[test]
    fn length_marker() {
        let mut short = Spritz::new();
        let mut single = Spritz::new();
        absorb_length(&mut short, 32);
        single.absorb(32);
        assert_eq!(short.squeeze_one(), single.squeeze_one());

        let mut long = Spritz::new();
        let mut pair = Spritz::new();
        absorb_length(&mut long, 0x0102);
        pair.absorb_many(&[0x01, 0x02]);
        assert_eq!(long.squeeze_one(), pair.squeeze_one());

        let mut zero = Spritz::new();
        let mut nul = Spritz::new();
        absorb_length(&mut zero, 0);
        nul.absorb(0);
        assert_eq!(zero.squeeze_one(), nul.squeeze_one());
    }

    #[test]
    fn digest_length() {
        assert_eq!(hash(8, b"").unwrap().len(), 1);
        assert_eq!(hash(128, b"abc").unwrap().len(), 16);
        assert_eq!(hash(256 * 8 + 8, b"abc").unwrap().len(), 257);
    }

    #[test]
    fn hash256_matches_hash() {
        for input in &[&b""[..], &b"a"[..], &b"abc"[..], &[0; 1000][..]] {
            assert_eq!(&hash256(input)[..], &hash(256, input).unwrap()[..]);
        }
    }

    #[test]
    fn length_binding() {
        let long = hash(256, b"abc").unwrap();
        let short = hash(128, b"abc").unwrap();

        assert_ne!(long[0], short[0]);
        assert_ne!(&long[..16], &short[..]);
    }

    #[test]
    fn nibble_order() {
        assert_ne!(hash(256, &[0x1F]).unwrap(), hash(256, &[0xF1]).unwrap());
    }

    #[test]
    fn position_dependent() {
        assert_ne!(hash(256, &[1, 2, 3, 4]).unwrap(), hash(256, &[1, 0, 2, 3, 4]).unwrap());
        assert_ne!(hash(256, &[1, 2, 3, 4]).unwrap(), hash(256, &[1, 2, 3, 4, 0]).unwrap());
        assert_ne!(hash(256, &[1, 2, 3, 4]).unwrap(), hash(256, &[0, 1, 2, 3, 4]).unwrap());
        assert_ne!(hash(256, b"ab").unwrap(), hash(256, b"ba").unwrap());
    }

    #[test]
    fn reader_matches_slice() {
        let mut data = Vec::new();
        for n in 0..10_000u32 {
            data.push((n * 7 % 251) as u8);
        }

        assert_eq!(hash_reader(256, Cursor::new(&data)).unwrap(), hash(256, &data).unwrap());
        assert_eq!(hash_reader(256, io::empty()).unwrap(), hash(256, b"").unwrap());
    }

    #[test]
    fn reader_retries_interrupts() {
        let reader = Interrupting {
            data: b"to be or not to be",
            interrupt: false,
        };

        assert_eq!(hash_reader(256, reader).unwrap(), hash(256, b"to be or not to be").unwrap());
    }

    #[test]
    fn reader_error_propagates() {
        match hash_reader(256, Broken { left: 5000 }) {
            Err(Error::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::Other),
            _ => panic!("the read error should be returned"),
        }
    }
}
