use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Number of bytes in a [`CardSeed`].
pub const SEED_LEN: usize = 32;

/// A 256-bit seed that fully determines a generated card.
///
/// Seeds print as 64 lowercase hex digits and parse back from either case.
///
/// # Examples
///
/// ```
/// use bingoduel_generator::CardSeed;
///
/// let seed: CardSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().parse::<CardSeed>(), Ok(seed));
/// assert_ne!(seed.derive("first"), seed.derive("second"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSeed([u8; SEED_LEN]);

impl CardSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Derives a child seed as `SHA-256(seed || label)`.
    ///
    /// Distinct labels give unrelated seeds; the same label always gives the
    /// same seed.
    #[must_use]
    pub fn derive(&self, label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns the RNG this seed drives.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; SEED_LEN]> for CardSeed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for CardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`CardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, found {found} characters")]
    InvalidLength {
        /// Number of characters supplied.
        found: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit {
        /// Offending character.
        ch: char,
        /// Character offset within the text.
        offset: usize,
    },
}

impl FromStr for CardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != SEED_LEN * 2 {
            return Err(ParseSeedError::InvalidLength { found });
        }

        let mut bytes = [0; SEED_LEN];
        for (offset, ch) in s.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidDigit { ch, offset })?;
            #[expect(clippy::cast_possible_truncation)]
            let nibble = nibble as u8;
            let byte = &mut bytes[offset / 2];
            *byte = (*byte << 4) | nibble;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_round_trip() {
        let seed: CardSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper: CardSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(upper, SEED.parse().unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abcd".parse::<CardSeed>(),
            Err(ParseSeedError::InvalidLength { found: 4 })
        );
        let mut bad = SEED.to_owned();
        bad.replace_range(10..11, "g");
        assert_eq!(
            bad.parse::<CardSeed>(),
            Err(ParseSeedError::InvalidDigit { ch: 'g', offset: 10 })
        );
        let wide = "é".repeat(64);
        assert_eq!(
            wide.parse::<CardSeed>(),
            Err(ParseSeedError::InvalidDigit { ch: 'é', offset: 0 })
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let seed = CardSeed::from_bytes([7; SEED_LEN]);
        assert_eq!(seed.derive("round-1"), seed.derive("round-1"));
        assert_ne!(seed.derive("round-1"), seed.derive("round-2"));
        assert_ne!(seed.derive(""), seed);
    }

    #[test]
    fn test_rng_is_reproducible() {
        let seed: CardSeed = SEED.parse().unwrap();
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        a.shuffle(&mut seed.rng());
        b.shuffle(&mut seed.rng());
        assert_eq!(a, b);
    }
}
