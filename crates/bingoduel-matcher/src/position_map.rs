use std::collections::{BTreeMap, btree_map::Entry};

use bingoduel_core::{Card, CellPosition, CellValue, InvalidCardError};

/// Mapping from each value of a card to the cell holding it.
///
/// Built by [`generate_position_map`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    positions: BTreeMap<CellValue, CellPosition>,
}

impl PositionMap {
    /// Returns the position of `value`, or `None` if the card does not hold it.
    #[must_use]
    pub fn get(&self, value: CellValue) -> Option<CellPosition> {
        self.positions.get(&value).copied()
    }

    /// Returns `true` if the card holds `value`.
    #[must_use]
    pub fn contains(&self, value: CellValue) -> bool {
        self.positions.contains_key(&value)
    }

    /// Returns the number of entries (always 25 for a valid card).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns an iterator over `(value, position)` pairs in ascending value order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (CellValue, CellPosition)> + '_ {
        self.positions.iter().map(|(value, pos)| (*value, *pos))
    }
}

/// Maps every value of `card` to its position.
///
/// # Errors
///
/// Returns [`InvalidCardError::DuplicateValue`] if a value appears twice,
/// rather than letting the later cell overwrite the earlier one.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{Card, CellPosition, CellValue};
/// use bingoduel_matcher::generate_position_map;
///
/// let card: Card = "25 24 23 22 21 / 20 19 18 17 16 / 15 14 13 12 11 / 10 9 8 7 6 / 5 4 3 2 1"
///     .parse()?;
/// let map = generate_position_map(&card)?;
///
/// assert_eq!(map.len(), 25);
/// assert_eq!(map.get(CellValue::new(1).unwrap()), Some(CellPosition::new(4, 4)));
/// assert_eq!(map.get(CellValue::new(26).unwrap()), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_position_map(card: &Card) -> Result<PositionMap, InvalidCardError> {
    let mut positions = BTreeMap::new();
    for (pos, value) in card.iter() {
        match positions.entry(value) {
            Entry::Vacant(entry) => {
                entry.insert(pos);
            }
            Entry::Occupied(entry) => {
                return Err(InvalidCardError::DuplicateValue {
                    value,
                    first: *entry.get(),
                    second: pos,
                });
            }
        }
    }
    Ok(PositionMap { positions })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{identity_card, unique_card, v};

    #[test]
    fn test_identity_positions() {
        let map = generate_position_map(&identity_card()).unwrap();
        assert_eq!(map.len(), 25);
        assert!(!map.is_empty());
        assert_eq!(map.get(v(1)), Some(CellPosition::new(0, 0)));
        assert_eq!(map.get(v(13)), Some(CellPosition::new(2, 2)));
        assert_eq!(map.get(v(25)), Some(CellPosition::new(4, 4)));
        assert!(!map.contains(v(26)));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut rows = identity_card().to_rows();
        rows[0][1] = 20;
        let card = Card::from_rows(&rows).unwrap();
        assert_eq!(
            generate_position_map(&card),
            Err(InvalidCardError::DuplicateValue {
                value: v(20),
                first: CellPosition::new(0, 1),
                second: CellPosition::new(3, 4),
            })
        );
    }

    #[test]
    fn test_iter_ascending_values() {
        let map = generate_position_map(&identity_card()).unwrap();
        let values: Vec<u32> = map.iter().map(|(value, _)| value.get()).collect();
        assert_eq!(values, (1..=25).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn prop_round_trip(card in unique_card()) {
            let map = generate_position_map(&card).unwrap();
            prop_assert_eq!(map.len(), 25);
            for (value, pos) in map.iter() {
                prop_assert_eq!(card[pos], value);
            }
            for (pos, value) in card.iter() {
                prop_assert_eq!(map.get(value), Some(pos));
            }
        }
    }
}
