use std::fmt::{self, Display};

use bingoduel_core::{
    Card, CellPosition, InvalidCardError, containers::Array25, index::CellPositionSemantics,
};

use crate::generate_position_map;

/// Cross-reference from the cells of one card to the cells of another.
///
/// Entry `(r, c)` is the position in the second card of the value found at
/// `(r, c)` in the first card, or `None` when the second card lacks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupTable {
    cells: Array25<Option<CellPosition>, CellPositionSemantics>,
}

impl LookupTable {
    /// Returns where the value at `pos` of the first card sits in the second.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: CellPosition) -> Option<CellPosition> {
        self.cells[pos]
    }

    /// Translates a position on the first card into the second card.
    ///
    /// Alias of [`LookupTable::get`] that reads better at call sites moving a
    /// highlight from one card to the other.
    #[must_use]
    pub fn translate(&self, pos: CellPosition) -> Option<CellPosition> {
        self.get(pos)
    }

    /// Returns the number of values present on both cards.
    #[must_use]
    pub fn shared_count(&self) -> usize {
        self.cells.iter().filter(|entry| entry.is_some()).count()
    }

    /// Returns an iterator over `(position, target)` pairs in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (CellPosition, Option<CellPosition>)> + '_ {
        self.cells.entries().map(|(pos, target)| (pos, *target))
    }
}

/// Formats the table as five rows of `rc` targets, with `--` for misses.
impl Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, target) in self.entries() {
            if pos.col() > 0 {
                f.write_str(" ")?;
            } else if pos.row() > 0 {
                f.write_str("\n")?;
            }
            match target {
                Some(target) => write!(f, "{}{}", target.row(), target.col())?,
                None => f.write_str("--")?,
            }
        }
        Ok(())
    }
}

/// Maps every cell of `card1` to the cell of `card2` holding the same value.
///
/// Values of `card1` that `card2` does not hold map to `None`. The cards may
/// draw from different value ranges.
///
/// # Errors
///
/// Returns [`InvalidCardError::DuplicateValue`] if `card2` holds a value twice,
/// since a target cell would then be ambiguous.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{Card, CellPosition};
/// use bingoduel_matcher::generate_lookup_table;
///
/// let card1: Card = "1 2 3 4 5 / 6 7 8 9 10 / 11 12 13 14 15 / 16 17 18 19 20 / 21 22 23 24 25"
///     .parse()?;
/// let card2: Card = "25 24 23 22 21 / 20 19 18 17 16 / 15 14 13 12 11 / 10 9 8 7 6 / 99 4 3 2 1"
///     .parse()?;
///
/// let table = generate_lookup_table(&card1, &card2)?;
/// assert_eq!(table.get(CellPosition::new(0, 0)), Some(CellPosition::new(4, 4)));
/// assert_eq!(table.get(CellPosition::new(2, 2)), Some(CellPosition::new(2, 2)));
/// assert_eq!(table.get(CellPosition::new(0, 4)), None);
/// assert_eq!(table.shared_count(), 24);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_lookup_table(card1: &Card, card2: &Card) -> Result<LookupTable, InvalidCardError> {
    let targets = generate_position_map(card2)?;
    let cells = Array25::from_fn(|pos: CellPosition| targets.get(card1[pos]));
    Ok(LookupTable { cells })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{identity_card, unique_card};

    fn reversed_card() -> Card {
        let rows: Vec<Vec<u32>> = (0..5)
            .map(|r| (0..5).map(|c| 25 - (r * 5 + c)).collect())
            .collect();
        Card::from_rows(&rows).unwrap()
    }

    fn offset_card(offset: u32) -> Card {
        let rows: Vec<Vec<u32>> = (0..5)
            .map(|r| (1..=5).map(|c| offset + r * 5 + c).collect())
            .collect();
        Card::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_same_card_is_identity() {
        let card = identity_card();
        let table = generate_lookup_table(&card, &card).unwrap();
        for pos in CellPosition::ALL {
            assert_eq!(table.get(pos), Some(pos));
        }
        assert_eq!(table.shared_count(), 25);
    }

    #[test]
    fn test_reversed_card_mirrors_positions() {
        let table = generate_lookup_table(&identity_card(), &reversed_card()).unwrap();
        for pos in CellPosition::ALL {
            let mirrored = CellPosition::new(4 - pos.row(), 4 - pos.col());
            assert_eq!(table.translate(pos), Some(mirrored));
        }
    }

    #[test]
    fn test_disjoint_cards_are_all_sentinel() {
        let table = generate_lookup_table(&identity_card(), &offset_card(100)).unwrap();
        assert_eq!(table.shared_count(), 0);
        assert!(table.entries().all(|(_, target)| target.is_none()));
    }

    #[test]
    fn test_partial_overlap() {
        // offset 10 shares values 11..=25, the bottom three rows of the identity card
        let table = generate_lookup_table(&identity_card(), &offset_card(10)).unwrap();
        assert_eq!(table.shared_count(), 15);
        assert_eq!(table.get(CellPosition::new(0, 0)), None);
        assert_eq!(
            table.get(CellPosition::new(2, 0)),
            Some(CellPosition::new(0, 0))
        );
    }

    #[test]
    fn test_duplicate_in_target_card_is_rejected() {
        let mut rows = identity_card().to_rows();
        rows[4][4] = 1;
        let card2 = Card::from_rows(&rows).unwrap();
        assert!(matches!(
            generate_lookup_table(&identity_card(), &card2),
            Err(InvalidCardError::DuplicateValue { .. })
        ));
    }

    #[test]
    fn test_display() {
        let card = identity_card();
        let table = generate_lookup_table(&card, &offset_card(20)).unwrap();
        let text = table.to_string();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some("-- -- -- -- --"));
        assert_eq!(text.lines().last(), Some("00 01 02 03 04"));
    }

    proptest! {
        #[test]
        fn prop_sentinel_iff_absent(card1 in unique_card(), card2 in unique_card()) {
            let table = generate_lookup_table(&card1, &card2).unwrap();
            for (pos, target) in table.entries() {
                match target {
                    Some(target) => prop_assert_eq!(card2[target], card1[pos]),
                    None => prop_assert!(!card2.contains(card1[pos])),
                }
            }
        }
    }
}
