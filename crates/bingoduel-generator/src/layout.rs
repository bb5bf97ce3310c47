use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

use bingoduel_core::{CARD_SIZE, CELL_COUNT, Card, CellValue};
use rand::seq::SliceRandom as _;

/// How values are drawn onto a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardLayout {
    /// The numbers 1 through 25 in random order.
    ///
    /// Both players of a duel hold the same numbers in different places, so
    /// every call marks a cell on both cards.
    #[default]
    Permutation25,
    /// Five distinct numbers per column, column `c` drawing from
    /// `15c + 1 ..= 15c + 15`.
    Classic75,
}

impl CardLayout {
    /// All layouts.
    pub const ALL: [Self; 2] = [Self::Permutation25, Self::Classic75];

    /// Returns the range every value of this layout falls in.
    #[must_use]
    pub const fn value_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Permutation25 => 1..=25,
            Self::Classic75 => 1..=75,
        }
    }

    /// Returns the short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Permutation25 => "permutation25",
            Self::Classic75 => "classic75",
        }
    }

    /// Fills a card using `rng`.
    #[must_use]
    pub fn fill<R>(self, rng: &mut R) -> Card
    where
        R: rand::Rng + ?Sized,
    {
        match self {
            Self::Permutation25 => fill_permutation(rng),
            Self::Classic75 => fill_classic(rng),
        }
    }
}

fn values_in(range: RangeInclusive<u32>) -> Vec<CellValue> {
    range.filter_map(CellValue::new).collect()
}

fn fill_permutation<R>(rng: &mut R) -> Card
where
    R: rand::Rng + ?Sized,
{
    let mut pool = values_in(CardLayout::Permutation25.value_range());
    debug_assert_eq!(pool.len(), CELL_COUNT);
    pool.shuffle(rng);
    Card::from_values(std::array::from_fn(|row| {
        std::array::from_fn(|col| pool[row * CARD_SIZE + col])
    }))
}

fn fill_classic<R>(rng: &mut R) -> Card
where
    R: rand::Rng + ?Sized,
{
    const COLUMN_SPAN: u32 = 15;

    let mut columns = [[CellValue::MIN; CARD_SIZE]; CARD_SIZE];
    for (base, column) in (0..).step_by(COLUMN_SPAN as usize).zip(&mut columns) {
        let mut pool = values_in(base + 1..=base + COLUMN_SPAN);
        pool.shuffle(rng);
        column.copy_from_slice(&pool[..CARD_SIZE]);
    }
    Card::from_values(std::array::from_fn(|row| {
        std::array::from_fn(|col| columns[col][row])
    }))
}

impl Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a layout name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown card layout {name:?}")]
pub struct ParseLayoutError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for CardLayout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLayoutError { name: s.to_owned() })
    }
}
