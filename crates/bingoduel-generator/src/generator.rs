use bingoduel_core::Card;

use crate::{CardLayout, CardSeed};

/// A generated card together with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCard {
    /// The card.
    pub card: Card,
    /// Seed that regenerates `card` with the same layout.
    pub seed: CardSeed,
}

/// Generates bingo cards for a fixed [`CardLayout`].
///
/// # Examples
///
/// ```
/// use bingoduel_generator::{CardGenerator, CardLayout};
///
/// let generator = CardGenerator::new(CardLayout::Classic75);
/// let generated = generator.generate();
///
/// assert!(generated.card.validate_unique().is_ok());
/// assert_eq!(generator.generate_with_seed(generated.seed), generated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardGenerator {
    layout: CardLayout,
}

impl CardGenerator {
    /// Creates a generator for `layout`.
    #[must_use]
    pub const fn new(layout: CardLayout) -> Self {
        Self { layout }
    }

    /// Returns the layout this generator uses.
    #[must_use]
    pub const fn layout(&self) -> CardLayout {
        self.layout
    }

    /// Generates a card from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedCard {
        self.generate_with_seed(CardSeed::random())
    }

    /// Generates the card determined by `seed`.
    ///
    /// The same seed and layout always yield the same card.
    #[must_use]
    pub fn generate_with_seed(&self, seed: CardSeed) -> GeneratedCard {
        let card = self.layout.fill(&mut seed.rng());
        log::debug!("generated {} card from seed {seed}", self.layout);
        GeneratedCard { card, seed }
    }

    /// Deals both cards of round `round` from a game seed.
    ///
    /// Each card's seed is derived from `game_seed` with a label naming the
    /// round and the seat, so a whole match replays from one seed.
    #[must_use]
    pub fn deal(&self, game_seed: CardSeed, round: u32) -> [GeneratedCard; 2] {
        ["first", "second"].map(|seat| {
            let seed = game_seed.derive(&format!("round-{round}/{seat}"));
            self.generate_with_seed(seed)
        })
    }
}
