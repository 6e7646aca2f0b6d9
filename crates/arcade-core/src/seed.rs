//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// The random number generator used by every puzzle generator.
pub type PuzzleRng = Pcg64;

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal characters, so they
/// can be stored next to a session and shared between players.
///
/// # Examples
///
/// ```
/// use arcade_core::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from a small integer by hashing it.
    ///
    /// Convenient for tests and benchmarks that want stable, readable seeds.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(Sha256::digest(value.to_le_bytes()).into())
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the random number generator for this seed.
    #[must_use]
    pub fn rng(&self) -> PuzzleRng {
        Pcg64::from_seed(self.0)
    }

    /// Derives an independent sub-seed, e.g. for a retry after an exhausted attempt.
    ///
    /// The same `(self, label, counter)` triple always yields the same seed.
    #[must_use]
    pub fn derive(&self, label: &str, counter: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        hasher.update(counter.to_le_bytes());
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex character at offset {offset}")]
    InvalidHex {
        /// Byte offset of the offending character.
        offset: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let digits = s.as_bytes();
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_value(digits[i * 2]).ok_or(ParseSeedError::InvalidHex { offset: i * 2 })?;
            let lo = hex_value(digits[i * 2 + 1])
                .ok_or(ParseSeedError::InvalidHex { offset: i * 2 + 1 })?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<PuzzleSeed> for String {
    fn from(seed: PuzzleSeed) -> Self {
        seed.to_string()
    }
}

impl TryFrom<String> for PuzzleSeed {
    type Error = ParseSeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
