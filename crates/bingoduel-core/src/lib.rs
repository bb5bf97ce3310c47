//! Core data structures for bingo duels.
//!
//! This crate provides the fundamental types shared by line matching, card
//! generation, and game management.
//!
//! # Overview
//!
//! 1. **Core types** - Fundamental bingo types
//!    - [`position`]: Cell position (row, col) on a 5x5 card
//!    - [`value`]: Positive cell values and the number-or-string [`CellId`]
//!      identifiers used to mark them
//!    - [`card`]: The 5x5 [`Card`] grid and its validation errors
//!    - [`line`]: The 12 winning lines, [`LINE_PATTERNS`], and [`LineSet`]
//!    - [`marked_cells`]: The set of values a player has marked
//!
//! 2. **Index semantics** - Define how values map to indices in containers
//!    - [`index`]: [`Index25`] and [`CellPositionSemantics`]
//!
//! 3. **Generic containers** - Containers parameterized by semantics
//!    - [`containers`]: [`Array25`]
//!
//! [`Index25`]: index::Index25
//! [`CellPositionSemantics`]: index::CellPositionSemantics
//! [`Array25`]: containers::Array25
//!
//! # Examples
//!
//! ```
//! use bingoduel_core::{Card, CellValue, Line, MarkedCells};
//!
//! let card: Card = "
//!      1  2  3  4  5
//!      6  7  8  9 10
//!     11 12 13 14 15
//!     16 17 18 19 20
//!     21 22 23 24 25
//! "
//! .parse()
//! .unwrap();
//!
//! let mut marked = MarkedCells::new();
//! marked.insert_id(7_u32).unwrap();
//! marked.insert_id("13").unwrap();
//!
//! let diagonal = Line::Diagonal.values(&card);
//! assert!(marked.contains(diagonal[1]));
//! assert!(marked.contains(CellValue::new(13).unwrap()));
//! ```

pub mod card;
pub mod containers;
pub mod index;
pub mod line;
pub mod marked_cells;
pub mod position;
pub mod value;

pub use self::{
    card::{Card, InvalidCardError, ParseCardError},
    line::{LINE_PATTERNS, Line, LineSet},
    marked_cells::MarkedCells,
    position::{CellPosition, InvalidPositionError},
    value::{CellId, CellValue, ParseCellValueError},
};

/// Number of rows and columns on a card.
pub const CARD_SIZE: usize = 5;

/// Number of cells on a card.
pub const CELL_COUNT: usize = CARD_SIZE * CARD_SIZE;

/// Number of winning lines (5 rows, 5 columns, 2 diagonals).
pub const LINE_COUNT: usize = 2 * CARD_SIZE + 2;
