//! Winning lines: five rows, five columns, and two diagonals.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{CARD_SIZE, Card, CellPosition, CellValue, LINE_COUNT};

/// One of the 12 winning lines of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Line {
    /// A row identified by its index (0-4).
    Row {
        /// Row index (0-4).
        row: u8,
    },
    /// A column identified by its index (0-4).
    Column {
        /// Column index (0-4).
        col: u8,
    },
    /// The diagonal from the top-left to the bottom-right corner.
    Diagonal,
    /// The diagonal from the top-right to the bottom-left corner.
    AntiDiagonal,
}

/// Cell positions of every line, in [`Line::ALL`] order.
///
/// Rows 0-4, then columns 0-4, then the main diagonal, then the
/// anti-diagonal. Each pattern lists its cells top to bottom, left to right.
pub const LINE_PATTERNS: [[CellPosition; CARD_SIZE]; LINE_COUNT] = {
    let mut patterns = [[CellPosition::new(0, 0); CARD_SIZE]; LINE_COUNT];
    let mut i = 0;
    while i < LINE_COUNT {
        patterns[i] = Line::ALL[i].compute_positions();
        i += 1;
    }
    patterns
};

impl Line {
    /// All lines in pattern order.
    pub const ALL: [Self; LINE_COUNT] = {
        let mut all = [Self::Diagonal; LINE_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CARD_SIZE {
            all[i] = Self::Row { row: i as u8 };
            all[i + CARD_SIZE] = Self::Column { col: i as u8 };
            i += 1;
        }
        all[2 * CARD_SIZE] = Self::Diagonal;
        all[2 * CARD_SIZE + 1] = Self::AntiDiagonal;
        all
    };

    /// Returns the position of this line in [`Line::ALL`] (0-11).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Row { row } => row as usize,
            Self::Column { col } => CARD_SIZE + col as usize,
            Self::Diagonal => 2 * CARD_SIZE,
            Self::AntiDiagonal => 2 * CARD_SIZE + 1,
        }
    }

    /// Returns the cell positions of this line.
    #[must_use]
    #[inline]
    pub const fn positions(self) -> [CellPosition; CARD_SIZE] {
        LINE_PATTERNS[self.index()]
    }

    /// Returns the values of `card` along this line.
    #[must_use]
    pub fn values(self, card: &Card) -> [CellValue; CARD_SIZE] {
        self.positions().map(|pos| card[pos])
    }

    /// Returns `true` if `pos` lies on this line.
    #[must_use]
    pub const fn contains(self, pos: CellPosition) -> bool {
        match self {
            Self::Row { row } => pos.row() == row,
            Self::Column { col } => pos.col() == col,
            Self::Diagonal => pos.is_on_diagonal(),
            Self::AntiDiagonal => pos.is_on_anti_diagonal(),
        }
    }

    /// Returns an iterator over the lines passing through `pos`.
    ///
    /// Every cell lies on one row and one column; cells on a diagonal add one
    /// more line, and the center cell adds two.
    pub fn through(pos: CellPosition) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |line| line.contains(pos))
    }

    #[expect(clippy::cast_possible_truncation)]
    const fn compute_positions(self) -> [CellPosition; CARD_SIZE] {
        let mut positions = [CellPosition::new(0, 0); CARD_SIZE];
        let mut i = 0;
        while i < CARD_SIZE {
            let k = i as u8;
            positions[i] = match self {
                Self::Row { row } => CellPosition::new(row, k),
                Self::Column { col } => CellPosition::new(k, col),
                Self::Diagonal => CellPosition::new(k, k),
                Self::AntiDiagonal => CellPosition::new(k, CARD_SIZE as u8 - 1 - k),
            };
            i += 1;
        }
        positions
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { row } => write!(f, "row {row}"),
            Self::Column { col } => write!(f, "column {col}"),
            Self::Diagonal => f.write_str("diagonal"),
            Self::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

/// A set of lines, stored as a 12-bit mask in [`Line::ALL`] order.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{Line, LineSet};
///
/// let mut set = LineSet::EMPTY;
/// set.insert(Line::Column { col: 2 });
/// set.insert(Line::Row { row: 0 });
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(
///     set.iter().collect::<Vec<_>>(),
///     [Line::Row { row: 0 }, Line::Column { col: 2 }]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSet {
    bits: u16,
}

impl LineSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all 12 lines.
    pub const FULL: Self = Self {
        bits: (1 << LINE_COUNT) - 1,
    };

    const fn bit(line: Line) -> u16 {
        1 << line.index()
    }

    /// Adds a line. Returns `true` if it was not already present.
    pub fn insert(&mut self, line: Line) -> bool {
        let added = !self.contains(line);
        self.bits |= Self::bit(line);
        added
    }

    /// Returns `true` if the set contains `line`.
    #[must_use]
    pub const fn contains(self, line: Line) -> bool {
        self.bits & Self::bit(line) != 0
    }

    /// Returns the number of lines in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every line of `self` is in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns an iterator over the lines in [`Line::ALL`] order.
    #[must_use]
    pub fn iter(self) -> LineSetIter {
        LineSetIter { bits: self.bits }
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for line in iter {
            set.insert(line);
        }
        set
    }
}

impl IntoIterator for LineSet {
    type Item = Line;
    type IntoIter = LineSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the lines of a [`LineSet`].
#[derive(Debug, Clone)]
pub struct LineSetIter {
    bits: u16,
}

impl Iterator for LineSetIter {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Line::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for LineSetIter {}
impl ExactSizeIterator for LineSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(Line::ALL[0], Line::Row { row: 0 });
        assert_eq!(Line::ALL[4], Line::Row { row: 4 });
        assert_eq!(Line::ALL[5], Line::Column { col: 0 });
        assert_eq!(Line::ALL[9], Line::Column { col: 4 });
        assert_eq!(Line::ALL[10], Line::Diagonal);
        assert_eq!(Line::ALL[11], Line::AntiDiagonal);
        for (i, line) in Line::ALL.into_iter().enumerate() {
            assert_eq!(line.index(), i);
        }
    }

    #[test]
    fn test_patterns() {
        assert_eq!(
            LINE_PATTERNS[1],
            [0, 1, 2, 3, 4].map(|c| CellPosition::new(1, c))
        );
        assert_eq!(
            LINE_PATTERNS[7],
            [0, 1, 2, 3, 4].map(|r| CellPosition::new(r, 2))
        );
        assert_eq!(
            Line::Diagonal.positions(),
            [0, 1, 2, 3, 4].map(|k| CellPosition::new(k, k))
        );
        assert_eq!(
            Line::AntiDiagonal.positions(),
            [0, 1, 2, 3, 4].map(|k| CellPosition::new(k, 4 - k))
        );
    }

    #[test]
    fn test_patterns_agree_with_contains() {
        for line in Line::ALL {
            for pos in CellPosition::ALL {
                assert_eq!(line.positions().contains(&pos), line.contains(pos));
            }
        }
    }

    #[test]
    fn test_lines_through() {
        assert_eq!(Line::through(CellPosition::new(2, 2)).count(), 4);
        assert_eq!(Line::through(CellPosition::new(0, 0)).count(), 3);
        assert_eq!(Line::through(CellPosition::new(0, 1)).count(), 2);
    }

    #[test]
    fn test_line_set() {
        let mut set = LineSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(Line::AntiDiagonal));
        assert!(!set.insert(Line::AntiDiagonal));
        set.insert(Line::Row { row: 3 });
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [Line::Row { row: 3 }, Line::AntiDiagonal]
        );
        assert!(set.is_subset(LineSet::FULL));
        assert_eq!(LineSet::FULL.len(), 12);
        assert!(!LineSet::FULL.is_subset(set));
        assert_eq!(LineSet::FULL.iter().collect::<Vec<_>>(), Line::ALL);
    }
}
