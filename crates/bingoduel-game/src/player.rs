use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

/// One of the two seats at a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum PlayerSlot {
    /// The first seat.
    #[default]
    First,
    /// The second seat.
    Second,
}

impl PlayerSlot {
    /// Both seats, first then second.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Returns `0` for the first seat and `1` for the second.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// A pair of values, one per [`PlayerSlot`].
///
/// # Examples
///
/// ```
/// use bingoduel_game::{PlayerSlot, Players};
///
/// let mut scores = Players::new(0_u32, 0);
/// scores[PlayerSlot::Second] += 1;
/// assert_eq!(scores.into_array(), [0, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Players<T>([T; 2]);

impl<T> Players<T> {
    /// Creates a pair from the first and second seat's values.
    pub const fn new(first: T, second: T) -> Self {
        Self([first, second])
    }

    /// Builds a pair by evaluating `f` for each seat.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(PlayerSlot) -> T,
    {
        Self(PlayerSlot::ALL.map(&mut f))
    }

    /// Applies `f` to both values.
    pub fn map<U, F>(self, f: F) -> Players<U>
    where
        F: FnMut(T) -> U,
    {
        Players(self.0.map(f))
    }

    /// Returns an iterator over `(seat, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &T)> {
        PlayerSlot::ALL.into_iter().zip(&self.0)
    }

    /// Returns the values as an array, first seat first.
    pub fn into_array(self) -> [T; 2] {
        self.0
    }
}

impl<T> From<[T; 2]> for Players<T> {
    fn from(array: [T; 2]) -> Self {
        Self(array)
    }
}

impl<T> Index<PlayerSlot> for Players<T> {
    type Output = T;

    fn index(&self, slot: PlayerSlot) -> &Self::Output {
        &self.0[slot.index()]
    }
}

impl<T> IndexMut<PlayerSlot> for Players<T> {
    fn index_mut(&mut self, slot: PlayerSlot) -> &mut Self::Output {
        &mut self.0[slot.index()]
    }
}
