//! The Spritz automaton.
//!
//! Spritz keeps a permutation of the bytes `0..256` together with six byte registers. Input is
//! absorbed a nibble at a time, each nibble transposing one entry of the permutation, and output
//! is squeezed by stepping an RC4-like update and reading the table through three levels of
//! indirection.
//!
//! All register and index arithmetic is modulo 256. We get that for free by storing everything as
//! `u8` and using wrapping operations, which also means no index can ever leave the table.

use std::iter::FusedIterator;

/// The size of the permutation table.
const N: usize = 256;
/// The number of nibbles which can be absorbed before the state must be shuffled.
const HALF: u8 = (N / 2) as u8;
/// The number of updates in each whip of a shuffle.
const WHIP_ROUNDS: usize = 2 * N;

/// Greatest common divisor.
fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// A Spritz state.
///
/// A fresh state holds the identity permutation. It is advanced exclusively through `absorb*`
/// and `squeeze*`, and the table remains a permutation of `0..256` after every call.
#[derive(Clone)]
pub struct Spritz {
    /// The permutation table.
    s: [u8; N],
    /// The index register, advanced by `w` on every update.
    i: u8,
    /// `j`
    j: u8,
    /// `k`
    k: u8,
    /// The last output byte.
    z: u8,
    /// The number of nibbles absorbed since the last shuffle.
    a: u8,
    /// The step size of `i`. Always coprime with `N`.
    w: u8,
}

impl Default for Spritz {
    fn default() -> Spritz {
        let mut s = [0; N];
        for (n, x) in s.iter_mut().enumerate() {
            *x = n as u8;
        }

        Spritz {
            s: s,
            i: 0,
            j: 0,
            k: 0,
            z: 0,
            a: 0,
            w: 1,
        }
    }
}

impl Spritz {
    /// Create a state holding the identity permutation.
    pub fn new() -> Spritz {
        Spritz::default()
    }

    /// Absorb a byte.
    ///
    /// The low nibble goes in first. Swapping the order gives a different (and incompatible)
    /// sponge.
    pub fn absorb(&mut self, b: u8) {
        self.absorb_nibble(b & 0x0F);
        self.absorb_nibble(b >> 4);
    }

    /// Absorb every byte of `bytes` in order.
    pub fn absorb_many(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.absorb(b);
        }
    }

    /// Insert a marker separating two absorption phases.
    ///
    /// This advances the absorption counter like a nibble would, but leaves the table untouched.
    pub fn absorb_stop(&mut self) {
        if self.a == HALF {
            self.shuffle();
        }

        self.a = self.a.wrapping_add(1);
    }

    /// Squeeze a single byte of output.
    pub fn squeeze_one(&mut self) -> u8 {
        if self.a > 0 {
            self.shuffle();
        }

        self.drip()
    }

    /// Lazily squeeze `count` bytes.
    ///
    /// Output continues where the previous squeeze left off, so squeezing 16 and then 16 more
    /// bytes yields the same stream as squeezing 32 at once.
    pub fn squeeze_many(&mut self, count: usize) -> Squeeze<'_> {
        Squeeze {
            state: self,
            remaining: count,
        }
    }

    /// Fill `buf` with output.
    pub fn squeeze_into(&mut self, buf: &mut [u8]) {
        let len = buf.len();
        for (b, x) in buf.iter_mut().zip(self.squeeze_many(len)) {
            *b = x;
        }
    }

    /// Absorb a nibble (`x < 16`).
    ///
    /// The nibble selects which entry of the upper half gets swapped with position `a`.
    fn absorb_nibble(&mut self, x: u8) {
        debug_assert!(x < 16, "Nibble out of range.");

        if self.a == HALF {
            self.shuffle();
        }

        self.s.swap(self.a as usize, HALF.wrapping_add(x) as usize);
        self.a = self.a.wrapping_add(1);
    }

    /// Run a single mixing round.
    fn update(&mut self) {
        self.i = self.i.wrapping_add(self.w);
        self.j = self.k.wrapping_add(self.s[self.j.wrapping_add(self.s[self.i as usize]) as usize]);
        self.k = self.i.wrapping_add(self.k).wrapping_add(self.s[self.j as usize]);
        self.s.swap(self.i as usize, self.j as usize);
    }

    /// Run `rounds` updates and then step `w` to the next value coprime with the table size.
    fn whip(&mut self, rounds: usize) {
        for _ in 0..rounds {
            self.update();
        }

        // Since `N` is a power of two, this stops at the next odd value.
        loop {
            self.w = self.w.wrapping_add(1);
            if gcd(self.w as usize, N) == 1 {
                break;
            }
        }
    }

    /// Order every entry of the lower half below its mirror in the upper half.
    ///
    /// This throws away information about which transpositions led to the current table.
    fn crush(&mut self) {
        for v in 0..N / 2 {
            let mirror = N - 1 - v;
            if self.s[v] > self.s[mirror] {
                self.s.swap(v, mirror);
            }
        }
    }

    /// Remix the whole state and reset the absorption counter.
    fn shuffle(&mut self) {
        self.whip(WHIP_ROUNDS);
        self.crush();
        self.whip(WHIP_ROUNDS);
        self.crush();
        self.whip(WHIP_ROUNDS);
        self.a = 0;
    }

    /// Produce an output byte, assuming no absorbed input is pending.
    fn drip(&mut self) -> u8 {
        self.update();

        let t = self.s[self.z.wrapping_add(self.k) as usize];
        let t = self.s[self.i.wrapping_add(t) as usize];
        self.z = self.s[self.j.wrapping_add(t) as usize];

        self.z
    }
}

/// A lazy stream of squeezed bytes.
///
/// Created by `Spritz::squeeze_many`. Every yielded byte advances the underlying state, so the
/// stream cannot be rewound.
pub struct Squeeze<'a> {
    /// The state being squeezed.
    state: &'a mut Spritz,
    /// The number of bytes left to yield.
    remaining: usize,
}

impl<'a> Iterator for Squeeze<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            None
        } else {
            self.remaining -= 1;
            Some(self.state.squeeze_one())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Squeeze<'a> {}

impl<'a> FusedIterator for Squeeze<'a> {}
