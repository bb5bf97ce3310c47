use bingoduel_core::{CARD_SIZE, Card, CellValue, InvalidCardError, LINE_COUNT, Line, MarkedCells};

/// The values along one line, in pattern order.
pub type LineValues = [CellValue; CARD_SIZE];

/// Error returned when a line does not have exactly 5 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line must have 5 values, found {len}")]
pub struct InvalidLineError {
    /// Number of values supplied.
    pub len: usize,
}

/// Returns the values of all 12 lines of `card`.
///
/// Lines come in [`LINE_PATTERNS`](bingoduel_core::LINE_PATTERNS) order: rows
/// 0-4, columns 0-4, the main diagonal, then the anti-diagonal.
///
/// # Examples
///
/// ```
/// use bingoduel_core::Card;
/// use bingoduel_matcher::generate_lines;
///
/// let card: Card = "1 2 3 4 5 / 6 7 8 9 10 / 11 12 13 14 15 / 16 17 18 19 20 / 21 22 23 24 25"
///     .parse()?;
/// let lines = generate_lines(&card);
///
/// assert_eq!(lines.len(), 12);
/// assert_eq!(lines[5].map(|v| v.get()), [1, 6, 11, 16, 21]); // column 0
/// assert_eq!(lines[11].map(|v| v.get()), [5, 9, 13, 17, 21]); // anti-diagonal
/// # Ok::<(), bingoduel_core::ParseCardError>(())
/// ```
#[must_use]
pub fn generate_lines(card: &Card) -> [LineValues; LINE_COUNT] {
    Line::ALL.map(|line| line.values(card))
}

/// Returns the values of all 12 lines of a card given as raw rows.
///
/// # Errors
///
/// Returns [`InvalidCardError`] if `rows` is not 5x5 or holds a zero.
pub fn generate_lines_from_rows<R>(rows: &[R]) -> Result<[LineValues; LINE_COUNT], InvalidCardError>
where
    R: AsRef<[u32]>,
{
    let card = Card::from_rows(rows)?;
    Ok(generate_lines(&card))
}

/// Returns `true` if every value of `line` is marked.
///
/// Marks are compared after normalization, so a value marked through the
/// string `"12"` completes a line holding the number `12`.
///
/// # Errors
///
/// Returns [`InvalidLineError`] if `line` does not hold exactly 5 values.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{CellValue, MarkedCells};
/// use bingoduel_matcher::is_line_complete;
///
/// let line = [3, 8, 12, 19, 24].map(|n| CellValue::new(n).unwrap());
/// let marked = MarkedCells::try_from_ids(["3", "8", "12", "19"])?;
/// assert!(!is_line_complete(&line, &marked)?);
///
/// let mut marked = marked;
/// marked.insert_id(24_u32)?;
/// assert!(is_line_complete(&line, &marked)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn is_line_complete(line: &[CellValue], marked: &MarkedCells) -> Result<bool, InvalidLineError> {
    if line.len() != CARD_SIZE {
        return Err(InvalidLineError { len: line.len() });
    }
    Ok(marked.contains_all(line.iter().copied()))
}
