//! Index types and semantics for 25-element containers.
//!
//! [`Index25`] is a checked index into a container with one slot per card
//! cell. [`Index25Semantics`] defines how a user-facing value maps to that
//! index, so containers such as [`Array25`](crate::containers::Array25) can be
//! indexed by the value directly.
//!
//! # Examples
//!
//! ```
//! use bingoduel_core::{
//!     CellPosition,
//!     index::{CellPositionSemantics, Index25, Index25Semantics},
//! };
//!
//! let pos = CellPosition::new(2, 3);
//! let idx = CellPositionSemantics::to_index(pos);
//! assert_eq!(idx.index(), 13); // row 2, column 3 -> 2*5 + 3
//!
//! assert_eq!(CellPositionSemantics::from_index(idx), pos);
//! ```

use crate::{CELL_COUNT, CellPosition};

/// An index in the range 0-24.
///
/// Guarantees at construction time that the index addresses one of the 25
/// cells of a card in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index25 {
    index: u8,
}

impl Index25 {
    /// Creates a new index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-24.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < CELL_COUNT);
        Self { index }
    }

    /// Returns the underlying index value (0-24).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns an iterator over all 25 valid indices in ascending order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT as u8).map(Self::new)
    }
}

/// Defines the semantics for mapping values to indices in 25-element containers.
pub trait Index25Semantics {
    /// The type of values used to address the container.
    type Value;

    /// Converts a value to an index.
    fn to_index(value: Self::Value) -> Index25;

    /// Converts an index back to a value.
    fn from_index(index: Index25) -> Self::Value;
}

/// Semantics mapping [`CellPosition`] to row-major card indices.
#[derive(Debug)]
pub struct CellPositionSemantics;

impl Index25Semantics for CellPositionSemantics {
    type Value = CellPosition;

    #[inline]
    fn to_index(value: Self::Value) -> Index25 {
        Index25::new(value.index())
    }

    #[inline]
    fn from_index(index: Index25) -> Self::Value {
        CellPosition::from_index(index.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_indices() {
        let indices: Vec<_> = Index25::all().collect();
        assert_eq!(indices.len(), 25);
        assert_eq!(indices[0].index(), 0);
        assert_eq!(indices[24].index(), 24);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_rejects_twenty_five() {
        let _ = Index25::new(25);
    }

    #[test]
    fn test_position_semantics_round_trip() {
        for index in Index25::all() {
            let pos = CellPositionSemantics::from_index(index);
            assert_eq!(CellPositionSemantics::to_index(pos), index);
        }
        assert_eq!(
            CellPositionSemantics::to_index(CellPosition::new(4, 0)).index(),
            20
        );
    }
}
