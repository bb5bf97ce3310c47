//! The 5x5 bingo card.

use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{
    CARD_SIZE, CellPosition, CellValue,
    containers::Array25,
    index::CellPositionSemantics,
};

/// A 5x5 grid of positive cell values.
///
/// The shape is fixed by the type. Values are expected to be distinct, but a
/// card is allowed to hold duplicates until something needs to look values up
/// by position; [`Card::validate_unique`] reports the first duplicate.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{Card, CellPosition};
///
/// let card = Card::from_rows(&[
///     [1_u32, 2, 3, 4, 5],
///     [6, 7, 8, 9, 10],
///     [11, 12, 13, 14, 15],
///     [16, 17, 18, 19, 20],
///     [21, 22, 23, 24, 25],
/// ])
/// .unwrap();
///
/// assert_eq!(card[CellPosition::new(2, 2)].get(), 13);
/// assert!(card.validate_unique().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct Card {
    cells: Array25<CellValue, CellPositionSemantics>,
}

/// Errors for card shapes and contents that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidCardError {
    /// The card does not have exactly 5 rows.
    #[display("card must have 5 rows, found {found}")]
    RowCount {
        /// Number of rows supplied.
        found: usize,
    },
    /// A row does not have exactly 5 cells.
    #[display("card row {row} must have 5 cells, found {found}")]
    RowLength {
        /// Row index (0-based).
        row: usize,
        /// Number of cells supplied in that row.
        found: usize,
    },
    /// A cell holds zero.
    #[display("card cell {position} must hold a positive value")]
    NonPositiveValue {
        /// Offending cell.
        position: CellPosition,
    },
    /// The same value appears in two cells.
    #[display("card value {value} appears at both {first} and {second}")]
    DuplicateValue {
        /// Repeated value.
        value: CellValue,
        /// First cell holding the value, in row-major order.
        first: CellPosition,
        /// Next cell holding the value.
        second: CellPosition,
    },
}

impl Card {
    /// Creates a card from values laid out row by row.
    #[must_use]
    pub fn from_values(rows: [[CellValue; CARD_SIZE]; CARD_SIZE]) -> Self {
        let cells = Array25::from_fn(|pos: CellPosition| {
            rows[usize::from(pos.row())][usize::from(pos.col())]
        });
        Self { cells }
    }

    /// Creates a card from raw rows of integers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::RowCount`] or [`InvalidCardError::RowLength`]
    /// if the input is not 5x5, and [`InvalidCardError::NonPositiveValue`] if a
    /// cell holds zero.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, InvalidCardError>
    where
        R: AsRef<[u32]>,
    {
        if rows.len() != CARD_SIZE {
            return Err(InvalidCardError::RowCount { found: rows.len() });
        }
        for (row, cells) in rows.iter().enumerate() {
            let found = cells.as_ref().len();
            if found != CARD_SIZE {
                return Err(InvalidCardError::RowLength { row, found });
            }
        }

        let mut values = [[CellValue::MIN; CARD_SIZE]; CARD_SIZE];
        for pos in CellPosition::ALL {
            let (row, col) = (usize::from(pos.row()), usize::from(pos.col()));
            values[row][col] = CellValue::new(rows[row].as_ref()[col])
                .ok_or(InvalidCardError::NonPositiveValue { position: pos })?;
        }
        Ok(Self::from_values(values))
    }

    /// Returns the value at `pos`.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: CellPosition) -> CellValue {
        self.cells[pos]
    }

    /// Returns the values of row `row` from left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-4.
    #[must_use]
    pub fn row(&self, row: u8) -> [CellValue; CARD_SIZE] {
        #[expect(clippy::cast_possible_truncation)]
        std::array::from_fn(|col| self.cells[CellPosition::new(row, col as u8)])
    }

    /// Returns an iterator over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPosition, CellValue)> + '_ {
        self.cells.entries().map(|(pos, value)| (pos, *value))
    }

    /// Returns an iterator over the values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = CellValue> + '_ {
        self.cells.iter().copied()
    }

    /// Returns `true` if any cell holds `value`.
    #[must_use]
    pub fn contains(&self, value: CellValue) -> bool {
        self.cells.iter().any(|v| *v == value)
    }

    /// Returns the first position (row-major) holding `value`.
    #[must_use]
    pub fn position_of(&self, value: CellValue) -> Option<CellPosition> {
        self.iter().find(|(_, v)| *v == value).map(|(pos, _)| pos)
    }

    /// Checks that no value appears twice.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::DuplicateValue`] describing the first repeat
    /// found in row-major order.
    pub fn validate_unique(&self) -> Result<(), InvalidCardError> {
        let mut seen = HashMap::with_capacity(self.cells.as_array().len());
        for (pos, value) in self.iter() {
            if let Some(&first) = seen.get(&value) {
                return Err(InvalidCardError::DuplicateValue {
                    value,
                    first,
                    second: pos,
                });
            }
            seen.insert(value, pos);
        }
        Ok(())
    }

    /// Returns the card as rows of integers.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        #[expect(clippy::cast_possible_truncation)]
        (0..CARD_SIZE as u8)
            .map(|row| self.row(row).into_iter().map(CellValue::get).collect())
            .collect()
    }
}

impl Index<CellPosition> for Card {
    type Output = CellValue;

    #[inline]
    fn index(&self, pos: CellPosition) -> &Self::Output {
        &self.cells[pos]
    }
}

impl TryFrom<Vec<Vec<u32>>> for Card {
    type Error = InvalidCardError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Card> for Vec<Vec<u32>> {
    fn from(card: Card) -> Self {
        card.to_rows()
    }
}

/// Formats the card as five right-aligned rows.
///
/// The output parses back with [`Card::from_str`].
impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.values().map(|v| v.to_string().len()).max().unwrap_or(1);
        for (i, (pos, value)) in self.iter().enumerate() {
            if pos.col() > 0 {
                f.write_str(" ")?;
            } else if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{value:>width$}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCardError {
    /// A token was not an unsigned integer.
    #[display("invalid card token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// The parsed numbers do not form a valid card.
    #[display("{_0}")]
    Card(InvalidCardError),
}

impl From<InvalidCardError> for ParseCardError {
    fn from(err: InvalidCardError) -> Self {
        Self::Card(err)
    }
}

/// Parses a card from text.
///
/// Rows are separated by newlines or `/`; cells within a row by whitespace or
/// commas. Blank rows are ignored. A single row of 25 numbers is read as the
/// whole card in row-major order.
///
/// ```
/// use bingoduel_core::Card;
///
/// let a: Card = "1 2 3 4 5 / 6 7 8 9 10 / 11 12 13 14 15 / 16 17 18 19 20 / 21 22 23 24 25"
///     .parse()
///     .unwrap();
/// let b: Card = (1..=25).map(|n| n.to_string()).collect::<Vec<_>>().join(",").parse().unwrap();
/// assert_eq!(a, b);
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.split(['\n', '/']) {
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<u32>().map_err(|_| ParseCardError::InvalidToken {
                        token: token.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }

        if let [flat] = rows.as_slice()
            && flat.len() == CARD_SIZE * CARD_SIZE
        {
            rows = flat.chunks(CARD_SIZE).map(<[u32]>::to_vec).collect();
        }

        Ok(Self::from_rows(&rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_rows() -> Vec<Vec<u32>> {
        (0..5).map(|r| (1..=5).map(|c| r * 5 + c).collect()).collect()
    }

    #[test]
    fn test_from_rows_identity() {
        let card = Card::from_rows(&identity_rows()).unwrap();
        assert_eq!(card.get(CellPosition::new(0, 0)).get(), 1);
        assert_eq!(card.get(CellPosition::new(4, 4)).get(), 25);
        assert_eq!(card.to_rows(), identity_rows());
        assert_eq!(
            card.values().map(CellValue::get).collect::<Vec<_>>(),
            (1..=25).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_from_rows_rejects_wrong_dimensions() {
        let mut rows = identity_rows();
        rows.pop();
        assert_eq!(
            Card::from_rows(&rows),
            Err(InvalidCardError::RowCount { found: 4 })
        );

        let mut rows = identity_rows();
        rows[2].push(99);
        assert_eq!(
            Card::from_rows(&rows),
            Err(InvalidCardError::RowLength { row: 2, found: 6 })
        );

        let empty: [[u32; 0]; 0] = [];
        assert_eq!(
            Card::from_rows(&empty),
            Err(InvalidCardError::RowCount { found: 0 })
        );
    }

    #[test]
    fn test_from_rows_rejects_zero() {
        let mut rows = identity_rows();
        rows[3][1] = 0;
        assert_eq!(
            Card::from_rows(&rows),
            Err(InvalidCardError::NonPositiveValue {
                position: CellPosition::new(3, 1)
            })
        );
    }

    #[test]
    fn test_validate_unique_reports_first_duplicate() {
        let mut rows = identity_rows();
        rows[4][4] = 7;
        let card = Card::from_rows(&rows).unwrap();
        assert_eq!(
            card.validate_unique(),
            Err(InvalidCardError::DuplicateValue {
                value: CellValue::new(7).unwrap(),
                first: CellPosition::new(1, 1),
                second: CellPosition::new(4, 4),
            })
        );
    }

    #[test]
    fn test_position_of_and_contains() {
        let card = Card::from_rows(&identity_rows()).unwrap();
        let v = CellValue::new(19).unwrap();
        assert!(card.contains(v));
        assert_eq!(card.position_of(v), Some(CellPosition::new(3, 3)));
        assert_eq!(card.position_of(CellValue::new(26).unwrap()), None);
    }

    #[test]
    fn test_display_parses_back() {
        let card = Card::from_rows(&identity_rows()).unwrap();
        let text = card.to_string();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some(" 1  2  3  4  5"));
        assert_eq!(text.parse::<Card>(), Ok(card));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1 2 x".parse::<Card>(),
            Err(ParseCardError::InvalidToken {
                token: "x".to_owned()
            })
        );
        assert_eq!(
            "1 2 3".parse::<Card>(),
            Err(ParseCardError::Card(InvalidCardError::RowCount { found: 1 }))
        );
        assert_eq!(
            "1 2 3 4 5 / 6 7 8 9 10 / 11 12 13 / 16 17 18 19 20 / 21 22 23 24 25".parse::<Card>(),
            Err(ParseCardError::Card(InvalidCardError::RowLength {
                row: 2,
                found: 3
            }))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_rows() {
        let card = Card::from_rows(&identity_rows()).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.starts_with("[[1,2,3,4,5],"));
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert!(serde_json::from_str::<Card>("[[1,2,3]]").is_err());
    }
}
