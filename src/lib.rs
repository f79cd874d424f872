//! Bitgen: uniformly random bit strings
//!
//! The random source is always passed in explicitly, so that a seeded
//! generator can stand in for the OS entropy in tests.
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rand::{rngs::OsRng, rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

pub mod error;
pub mod frequency;

use crate::error::BitgenError;

/// the number of bits printed by the `bitgen` binary
pub const SIZE: usize = 128;

/// a single binary digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// an ordered sequence of bits, position 0 first
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitString(Vec<Bit>);

impl BitString {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bit> {
        self.0.iter()
    }

    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|b| **b == Bit::One).count()
    }
}

impl FromIterator<Bit> for BitString {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Bit>> for BitString {
    fn from(bits: Vec<Bit>) -> Self {
        Self(bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit)?;
        }

        Ok(())
    }
}

impl FromStr for BitString {
    type Err = BitgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(Bit::Zero),
                '1' => Ok(Bit::One),
                found => Err(BitgenError::InvalidDigit { position, found }),
            })
            .collect()
    }
}

/// seeds a [`StdRng`] from the bytes of `source`
///
/// if `source` fails to provide them, an [`BitgenError::Initialization`] is
/// returned.
pub fn rng_from(source: impl RngCore) -> Result<StdRng, BitgenError> {
    StdRng::from_rng(source).map_err(|e| BitgenError::Initialization(e.to_string()))
}

/// creates the process-wide random source, seeded from the OS entropy
///
/// this is the only fallible step of the whole program.
///
/// > **Note**
/// > this is a wrapper around [`rng_from`].
pub fn entropy_rng() -> Result<StdRng, BitgenError> {
    debug!("seeding random source from OS entropy");
    rng_from(OsRng)
}

/// draws a single bit, uniformly in $[0, 2)$
pub fn draw(rng: &mut impl RngCore) -> Bit {
    match rng.gen_range(0u8..2) {
        0 => Bit::Zero,
        _ => Bit::One,
    }
}

/// an endless stream of independent uniform bits drawn from `rng`
pub fn bits<R: RngCore>(rng: &mut R) -> impl Iterator<Item = Bit> + '_ {
    std::iter::repeat_with(move || draw(&mut *rng))
}

/// generates exactly `n` independent uniform bits
///
/// > **Note**
/// > this is a wrapper around [`bits`].
pub fn generate(n: usize, rng: &mut impl RngCore) -> BitString {
    debug!("generating {} bits", n);
    bits(rng).take(n).collect()
}

/// writes the bits to `writer` without any separator nor trailing newline
pub fn write_bits(writer: &mut impl Write, bits: &BitString) -> std::io::Result<()> {
    let buf: Vec<u8> = bits.iter().map(|b| b.as_char() as u8).collect();
    writer.write_all(&buf)
}
