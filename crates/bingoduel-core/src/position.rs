//! Cell positions on a 5x5 card.

use std::fmt::{self, Display};

use crate::CARD_SIZE;

/// A position on a card, identified by row and column (both 0-4).
///
/// Positions order row-major: `(0, 4)` comes before `(1, 0)`.
///
/// # Examples
///
/// ```
/// use bingoduel_core::CellPosition;
///
/// let pos = CellPosition::new(1, 3);
/// assert_eq!(pos.row(), 1);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.index(), 8);
///
/// assert!(CellPosition::try_new(5, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[u8; 2]", into = "[u8; 2]")
)]
pub struct CellPosition {
    row: u8,
    col: u8,
}

/// Error returned when a row or column is outside the range 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell position out of range: row {row}, column {col}")]
pub struct InvalidPositionError {
    /// Requested row.
    pub row: u8,
    /// Requested column.
    pub col: u8,
}

impl CellPosition {
    /// All 25 positions in row-major order.
    pub const ALL: [Self; 25] = {
        let mut all = [Self { row: 0, col: 0 }; 25];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 25 {
            all[i] = Self::from_index(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-4.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < CARD_SIZE && (col as usize) < CARD_SIZE,
            "cell position out of range"
        );
        Self { row, col }
    }

    /// Creates a new position, returning `None` if it is off the card.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < CARD_SIZE && (col as usize) < CARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from its row-major index (0-24).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 25 or greater.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: u8) -> Self {
        assert!((index as usize) < CARD_SIZE * CARD_SIZE, "cell index out of range");
        let size = CARD_SIZE as u8;
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Returns the row (0-4).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-4).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-24).
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn index(self) -> u8 {
        self.row * CARD_SIZE as u8 + self.col
    }

    /// Returns `true` if the position lies on the main diagonal.
    #[must_use]
    pub const fn is_on_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Returns `true` if the position lies on the anti-diagonal.
    #[must_use]
    pub const fn is_on_anti_diagonal(self) -> bool {
        self.row as usize + self.col as usize == CARD_SIZE - 1
    }
}

impl Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<[u8; 2]> for CellPosition {
    type Error = InvalidPositionError;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Self::try_new(row, col).ok_or(InvalidPositionError { row, col })
    }
}

impl From<CellPosition> for [u8; 2] {
    fn from(pos: CellPosition) -> Self {
        [pos.row, pos.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(CellPosition::ALL[0], CellPosition::new(0, 0));
        assert_eq!(CellPosition::ALL[4], CellPosition::new(0, 4));
        assert_eq!(CellPosition::ALL[5], CellPosition::new(1, 0));
        assert_eq!(CellPosition::ALL[24], CellPosition::new(4, 4));
        for (i, pos) in CellPosition::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(pos.index()), i);
        }
    }

    #[test]
    fn test_ordering_matches_index() {
        let mut sorted = CellPosition::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, CellPosition::ALL);
    }

    #[test]
    fn test_diagonals() {
        assert!(CellPosition::new(2, 2).is_on_diagonal());
        assert!(CellPosition::new(2, 2).is_on_anti_diagonal());
        assert!(CellPosition::new(0, 4).is_on_anti_diagonal());
        assert!(!CellPosition::new(0, 4).is_on_diagonal());
    }

    #[test]
    fn test_try_from_array() {
        assert_eq!(CellPosition::try_from([3, 1]), Ok(CellPosition::new(3, 1)));
        assert_eq!(
            CellPosition::try_from([0, 5]),
            Err(InvalidPositionError { row: 0, col: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "cell position out of range")]
    fn test_new_rejects_row_five() {
        let _ = CellPosition::new(5, 0);
    }
}
