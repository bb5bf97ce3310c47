//! Reproducible bingo card generation.
//!
//! A card is a pure function of a [`CardLayout`] and a 256-bit [`CardSeed`].
//! Seeds drive a PCG-64 generator, and child seeds are derived with SHA-256 so
//! one match seed deals every card of every round.
//!
//! # Examples
//!
//! ```
//! use bingoduel_generator::{CardGenerator, CardLayout, CardSeed};
//!
//! let seed: CardSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()
//!     .unwrap();
//! let generator = CardGenerator::new(CardLayout::Permutation25);
//!
//! let [first, second] = generator.deal(seed, 1);
//! assert_ne!(first.card, second.card);
//! assert_eq!(generator.generate_with_seed(first.seed).card, first.card);
//! ```

pub use self::{generator::*, layout::*, seed::*};

mod generator;
mod layout;
mod seed;
