use std::fmt::{self, Display};

use bingoduel_core::{Card, Line, LineSet, MarkedCells};
use tinyvec::ArrayVec;

/// A letter of the word "BINGO", earned one per completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BingoLetter {
    /// First completed line.
    #[default]
    B,
    /// Second completed line.
    I,
    /// Third completed line.
    N,
    /// Fourth completed line.
    G,
    /// Fifth completed line.
    O,
}

impl BingoLetter {
    /// All letters in milestone order.
    pub const ALL: [Self; 5] = [Self::B, Self::I, Self::N, Self::G, Self::O];

    /// Returns the letter earned when the completed-line count reaches `count`.
    ///
    /// Counts above 5 still map to [`BingoLetter::O`]; zero earns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bingoduel_matcher::BingoLetter;
    ///
    /// assert_eq!(BingoLetter::for_count(0), None);
    /// assert_eq!(BingoLetter::for_count(1), Some(BingoLetter::B));
    /// assert_eq!(BingoLetter::for_count(5), Some(BingoLetter::O));
    /// assert_eq!(BingoLetter::for_count(12), Some(BingoLetter::O));
    /// ```
    #[must_use]
    pub fn for_count(count: usize) -> Option<Self> {
        let index = count.checked_sub(1)?;
        Some(Self::ALL[index.min(Self::ALL.len() - 1)])
    }

    /// Returns the completed-line count at which this letter is earned (1-5).
    #[must_use]
    pub const fn milestone(self) -> usize {
        self as usize + 1
    }

    /// Returns the letter as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::B => 'B',
            Self::I => 'I',
            Self::N => 'N',
            Self::G => 'G',
            Self::O => 'O',
        }
    }
}

impl Display for BingoLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.as_char())
    }
}

/// Result of checking a card against a set of marks.
///
/// # Examples
///
/// ```
/// use bingoduel_core::{Card, Line, MarkedCells};
/// use bingoduel_matcher::check_completed_lines;
///
/// let card: Card = (1..=25).map(|n| n.to_string()).collect::<Vec<_>>().join(" ").parse()?;
/// let marked = MarkedCells::try_from_ids([1_u32, 7, 13, 19, 25, 2, 3, 4, 5])?;
///
/// let completion = check_completed_lines(&card, &marked);
/// assert_eq!(completion.completed_lines(), 2);
/// assert_eq!(completion.word(), "BI");
/// assert!(completion.lines().contains(Line::Diagonal));
/// assert!(completion.lines().contains(Line::Row { row: 0 }));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineCompletion {
    completed_lines: usize,
    marked_letters: ArrayVec<[BingoLetter; 5]>,
    lines: LineSet,
}

impl LineCompletion {
    /// Returns how many of the 12 lines are complete.
    #[must_use]
    pub fn completed_lines(&self) -> usize {
        self.completed_lines
    }

    /// Returns the letters earned, one per milestone crossed, capped at five.
    #[must_use]
    pub fn marked_letters(&self) -> &[BingoLetter] {
        &self.marked_letters
    }

    /// Returns the set of complete lines.
    #[must_use]
    pub fn lines(&self) -> LineSet {
        self.lines
    }

    /// Returns the earned letters as a string, e.g. `"BIN"`.
    #[must_use]
    pub fn word(&self) -> String {
        self.marked_letters.iter().map(|l| l.as_char()).collect()
    }

    /// Returns `true` if at least `threshold` lines are complete.
    #[must_use]
    pub fn reaches(&self, threshold: usize) -> bool {
        self.completed_lines >= threshold
    }

    /// Returns `true` once all five letters have been earned.
    #[must_use]
    pub fn is_bingo(&self) -> bool {
        self.marked_letters.len() == BingoLetter::ALL.len()
    }

    /// Returns the letters earned in `self` but not yet in `previous`.
    #[must_use]
    pub fn letters_since<'a>(&'a self, previous: &Self) -> &'a [BingoLetter] {
        let start = previous.marked_letters.len().min(self.marked_letters.len());
        &self.marked_letters[start..]
    }
}

/// Counts the fully marked lines of `card` and derives the earned letters.
///
/// Lines are scanned in [`Line::ALL`] order and every complete line crosses
/// one milestone: the first earns `B`, then `I`, `N`, `G`, and `O`. Further
/// lines still count towards [`LineCompletion::completed_lines`] but earn no
/// more letters.
#[must_use]
pub fn check_completed_lines(card: &Card, marked: &MarkedCells) -> LineCompletion {
    let mut completion = LineCompletion::default();
    for line in Line::ALL {
        if !marked.contains_all(line.values(card)) {
            continue;
        }
        completion.completed_lines += 1;
        completion.lines.insert(line);
        if completion.completed_lines <= BingoLetter::ALL.len()
            && let Some(letter) = BingoLetter::for_count(completion.completed_lines)
        {
            completion.marked_letters.push(letter);
        }
    }
    completion
}

#[cfg(test)]
mod tests {
    use bingoduel_core::CellValue;
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{identity_card, marks, unique_card};

    #[test]
    fn test_nothing_marked() {
        let completion = check_completed_lines(&identity_card(), &MarkedCells::new());
        assert_eq!(completion.completed_lines(), 0);
        assert!(completion.marked_letters().is_empty());
        assert!(completion.lines().is_empty());
        assert_eq!(completion.word(), "");
    }

    #[test]
    fn test_first_row_earns_b() {
        let completion = check_completed_lines(&identity_card(), &marks(1..=5));
        assert_eq!(completion.completed_lines(), 1);
        assert_eq!(completion.marked_letters(), [BingoLetter::B]);
        assert_eq!(
            completion.lines().iter().collect::<Vec<_>>(),
            [Line::Row { row: 0 }]
        );
    }

    #[test]
    fn test_full_card_caps_letters_at_five() {
        let completion = check_completed_lines(&identity_card(), &marks(1..=25));
        assert_eq!(completion.completed_lines(), 12);
        assert_eq!(completion.marked_letters(), BingoLetter::ALL);
        assert_eq!(completion.word(), "BINGO");
        assert!(completion.is_bingo());
        assert!(completion.reaches(12));
    }

    #[test]
    fn test_letters_follow_count_not_line_identity() {
        // columns 0 and 4 plus both diagonals
        let ids = [1, 6, 11, 16, 21, 5, 10, 15, 20, 25, 7, 13, 19, 9, 17];
        let completion = check_completed_lines(&identity_card(), &marks(ids));
        assert_eq!(completion.completed_lines(), 4);
        assert_eq!(completion.word(), "BING");
        assert!(!completion.is_bingo());
    }

    #[test]
    fn test_incomplete_line_does_not_count() {
        let completion = check_completed_lines(&identity_card(), &marks([1, 2, 3, 4, 6]));
        assert_eq!(completion.completed_lines(), 0);
    }

    #[test]
    fn test_marks_not_on_card_are_ignored() {
        let completion = check_completed_lines(&identity_card(), &marks([1, 2, 3, 4, 5, 99, 100]));
        assert_eq!(completion.completed_lines(), 1);
    }

    #[test]
    fn test_letters_since() {
        let card = identity_card();
        let before = check_completed_lines(&card, &marks(1..=5));
        let after = check_completed_lines(&card, &marks(1..=15));
        assert_eq!(after.letters_since(&before), [BingoLetter::I, BingoLetter::N]);
        assert!(before.letters_since(&after).is_empty());
    }

    #[test]
    fn test_letter_display() {
        let word: String = BingoLetter::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(word, "BINGO");
        assert_eq!(BingoLetter::G.milestone(), 4);
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_marks(
            card in unique_card(),
            picks in proptest::collection::vec(0..25_usize, 0..25),
            extra in proptest::collection::vec(0..25_usize, 0..25),
        ) {
            let values: Vec<CellValue> = card.values().collect();
            let small: MarkedCells = picks.iter().map(|&i| values[i]).collect();
            let mut big = small.clone();
            big.extend(extra.iter().map(|&i| values[i]));

            let before = check_completed_lines(&card, &small);
            let after = check_completed_lines(&card, &big);
            prop_assert!(after.completed_lines() >= before.completed_lines());
            prop_assert!(before.lines().is_subset(after.lines()));
            prop_assert!(after.marked_letters().starts_with(before.marked_letters()));
        }

        #[test]
        fn prop_letter_count_is_capped_count(
            card in unique_card(),
            picks in proptest::collection::vec(0..25_usize, 0..40),
        ) {
            let values: Vec<CellValue> = card.values().collect();
            let marked: MarkedCells = picks.iter().map(|&i| values[i]).collect();
            let completion = check_completed_lines(&card, &marked);
            prop_assert_eq!(completion.lines().len(), completion.completed_lines());
            prop_assert_eq!(
                completion.marked_letters().len(),
                completion.completed_lines().min(5)
            );
        }
    }
}
