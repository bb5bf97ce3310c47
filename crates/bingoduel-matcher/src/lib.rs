//! Line matching for bingo cards.
//!
//! This crate is a pure, stateless computation over a [`Card`] and the
//! [`MarkedCells`] of a player. It answers three questions:
//!
//! - which values make up each of the 12 winning lines ([`generate_lines`]),
//! - which lines are fully marked and which B-I-N-G-O letters that earns
//!   ([`is_line_complete`], [`check_completed_lines`]),
//! - where values sit on one card and on the opponent's card
//!   ([`generate_position_map`], [`generate_lookup_table`]).
//!
//! Every function allocates its own output and never mutates its inputs, so
//! all of them can be called concurrently without coordination.
//!
//! # Examples
//!
//! ```
//! use bingoduel_core::{Card, MarkedCells};
//! use bingoduel_matcher::{BingoLetter, check_completed_lines};
//!
//! let card: Card = (1..=25).map(|n| n.to_string()).collect::<Vec<_>>().join(" ").parse()?;
//! let marked = MarkedCells::try_from_ids(1..=5_u32)?;
//!
//! let completion = check_completed_lines(&card, &marked);
//! assert_eq!(completion.completed_lines(), 1);
//! assert_eq!(completion.marked_letters(), [BingoLetter::B]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Card`]: bingoduel_core::Card
//! [`MarkedCells`]: bingoduel_core::MarkedCells

pub use self::{completion::*, lines::*, lookup_table::*, position_map::*};

mod completion;
mod lines;
mod lookup_table;
mod position_map;

#[cfg(test)]
mod testing;
