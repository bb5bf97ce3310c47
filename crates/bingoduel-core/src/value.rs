//! Cell values and mark identifiers.
//!
//! Card cells hold positive integers ([`CellValue`]). Marks arrive from the
//! outer layers either as numbers or as their decimal text, so they are
//! carried as [`CellId`] and normalized to a [`CellValue`] before any
//! comparison. A mark recorded as the number `12` and one recorded as the
//! string `"12"` normalize to the same value.

use std::{
    fmt::{self, Display},
    num::NonZeroU32,
    str::FromStr,
};

/// A positive integer held in a card cell.
///
/// # Examples
///
/// ```
/// use bingoduel_core::CellValue;
///
/// let value: CellValue = "42".parse().unwrap();
/// assert_eq!(value.get(), 42);
/// assert_eq!(value.to_string(), "42");
///
/// assert!(CellValue::new(0).is_none());
/// assert!("042".parse::<CellValue>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct CellValue(NonZeroU32);

impl CellValue {
    /// The smallest cell value, `1`.
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Creates a cell value, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<CellValue> for u32 {
    fn from(value: CellValue) -> Self {
        value.get()
    }
}

impl From<NonZeroU32> for CellValue {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl TryFrom<u32> for CellValue {
    type Error = ParseCellValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseCellValueError::Zero)
    }
}

/// Error returned when a mark identifier is not a canonical positive decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCellValueError {
    /// The text was empty.
    #[display("cell value is empty")]
    Empty,
    /// The text contained something other than ASCII digits.
    #[display("cell value contains a non-digit character")]
    InvalidCharacter,
    /// The text had a leading zero, so it is not the canonical form of any value.
    #[display("cell value has a leading zero")]
    LeadingZero,
    /// The value was zero.
    #[display("cell value must be positive")]
    Zero,
    /// The value does not fit in 32 bits.
    #[display("cell value is too large")]
    Overflow,
}

impl FromStr for CellValue {
    type Err = ParseCellValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let Some(&first) = bytes.first() else {
            return Err(ParseCellValueError::Empty);
        };
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ParseCellValueError::InvalidCharacter);
        }
        if first == b'0' {
            return Err(if bytes.len() == 1 {
                ParseCellValueError::Zero
            } else {
                ParseCellValueError::LeadingZero
            });
        }
        let value: u32 = s.parse().map_err(|_| ParseCellValueError::Overflow)?;
        Self::try_from(value)
    }
}

/// A mark identifier as received from outside: a number or its decimal text.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{CellId, CellValue};
///
/// let twelve = CellValue::new(12).unwrap();
/// assert_eq!(CellId::from(12_u32).normalize(), Ok(twelve));
/// assert_eq!(CellId::from("12").normalize(), Ok(twelve));
/// assert!(CellId::from("twelve").normalize().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum CellId {
    /// A numeric identifier.
    Number(u32),
    /// A textual identifier.
    Text(String),
}

impl CellId {
    /// Normalizes the identifier to the cell value it names.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCellValueError`] if the number is zero or the text is
    /// not a canonical positive decimal.
    pub fn normalize(&self) -> Result<CellValue, ParseCellValueError> {
        match self {
            Self::Number(value) => CellValue::try_from(*value),
            Self::Text(text) => text.parse(),
        }
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => Display::fmt(value, f),
            Self::Text(text) => Display::fmt(text, f),
        }
    }
}

impl From<u32> for CellId {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl From<CellValue> for CellId {
    fn from(value: CellValue) -> Self {
        Self::Number(value.get())
    }
}

impl From<&str> for CellId {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for CellId {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!("1".parse::<CellValue>().map(CellValue::get), Ok(1));
        assert_eq!("75".parse::<CellValue>().map(CellValue::get), Ok(75));
        assert_eq!(
            "4294967295".parse::<CellValue>().map(CellValue::get),
            Ok(u32::MAX)
        );
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        assert_eq!("".parse::<CellValue>(), Err(ParseCellValueError::Empty));
        assert_eq!("0".parse::<CellValue>(), Err(ParseCellValueError::Zero));
        assert_eq!(
            "012".parse::<CellValue>(),
            Err(ParseCellValueError::LeadingZero)
        );
        assert_eq!(
            " 12".parse::<CellValue>(),
            Err(ParseCellValueError::InvalidCharacter)
        );
        assert_eq!(
            "+12".parse::<CellValue>(),
            Err(ParseCellValueError::InvalidCharacter)
        );
        assert_eq!(
            "4294967296".parse::<CellValue>(),
            Err(ParseCellValueError::Overflow)
        );
    }

    #[test]
    fn test_number_and_text_normalize_equal() {
        for n in [1_u32, 9, 10, 25, 75, 1000] {
            let from_number = CellId::from(n).normalize().unwrap();
            let from_text = CellId::from(n.to_string()).normalize().unwrap();
            assert_eq!(from_number, from_text);
            assert_eq!(from_number.to_string(), n.to_string());
        }
    }

    #[test]
    fn test_zero_number_rejected() {
        assert_eq!(CellId::Number(0).normalize(), Err(ParseCellValueError::Zero));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_mixed_ids() {
        let ids: Vec<CellId> = serde_json::from_str(r#"[12, "12", "x"]"#).unwrap();
        assert_eq!(ids[0], CellId::Number(12));
        assert_eq!(ids[1], CellId::Text("12".to_owned()));
        assert_eq!(ids[0].normalize(), ids[1].normalize());
        assert!(ids[2].normalize().is_err());
        assert!(serde_json::from_str::<CellValue>("0").is_err());
    }
}
