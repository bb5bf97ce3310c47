//! The set of values a player has marked.

use std::collections::{HashSet, hash_set};

use crate::{CellId, CellValue, ParseCellValueError};

/// Values a player has marked during the current round.
///
/// Every identifier is normalized to a [`CellValue`] on the way in, so marks
/// given as numbers and as decimal text compare equal. The set only grows
/// within a round; [`MarkedCells::clear`] resets it for the next one.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{CellValue, MarkedCells};
///
/// let mut marked = MarkedCells::new();
/// assert!(marked.insert_id(12_u32)?);
/// assert!(!marked.insert_id("12")?); // same mark
///
/// assert!(marked.contains(CellValue::new(12).unwrap()));
/// assert!(marked.contains_id("12"));
/// assert_eq!(marked.len(), 1);
/// # Ok::<(), bingoduel_core::ParseCellValueError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedCells {
    values: HashSet<CellValue>,
}

impl MarkedCells {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw identifiers, normalizing each one.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseCellValueError`] encountered.
    pub fn try_from_ids<I>(ids: I) -> Result<Self, ParseCellValueError>
    where
        I: IntoIterator,
        I::Item: Into<CellId>,
    {
        let mut marked = Self::new();
        for id in ids {
            marked.insert_id(id)?;
        }
        Ok(marked)
    }

    /// Marks a value. Returns `true` if it was not marked before.
    pub fn insert(&mut self, value: CellValue) -> bool {
        self.values.insert(value)
    }

    /// Marks a value given as a number or its decimal text.
    ///
    /// Returns `true` if it was not marked before.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCellValueError`] if the identifier is not a positive
    /// value in canonical form; the set is left unchanged.
    pub fn insert_id<T>(&mut self, id: T) -> Result<bool, ParseCellValueError>
    where
        T: Into<CellId>,
    {
        let value = id.into().normalize()?;
        Ok(self.insert(value))
    }

    /// Returns `true` if `value` is marked.
    #[must_use]
    pub fn contains(&self, value: CellValue) -> bool {
        self.values.contains(&value)
    }

    /// Returns `true` if the value named by `id` is marked.
    ///
    /// Identifiers that do not name a valid value are never marked.
    #[must_use]
    pub fn contains_id<T>(&self, id: T) -> bool
    where
        T: Into<CellId>,
    {
        id.into()
            .normalize()
            .is_ok_and(|value| self.contains(value))
    }

    /// Returns `true` if every value yielded by `values` is marked.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = CellValue>,
    {
        values.into_iter().all(|value| self.contains(value))
    }

    /// Returns the number of marked values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every mark.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns an iterator over the marked values in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, CellValue> {
        self.values.iter()
    }

    /// Returns the marked values in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<CellValue> {
        let mut values: Vec<_> = self.values.iter().copied().collect();
        values.sort_unstable();
        values
    }
}

impl FromIterator<CellValue> for MarkedCells {
    fn from_iter<I: IntoIterator<Item = CellValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<CellValue> for MarkedCells {
    fn extend<I: IntoIterator<Item = CellValue>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MarkedCells {
    type Item = &'a CellValue;
    type IntoIter = hash_set::Iter<'a, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
