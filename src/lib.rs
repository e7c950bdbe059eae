//! Poker hand evaluation.
//!
//! Parse hands written as whitespace separated two character cards
//! (suit then value, for example `"H2 SQ C2 D2 CQ"`), rank five card
//! hands, find the best five cards out of seven, and compare hands.
//!
//! ```
//! use poker_eval::core::{Category, Hand, Rankable, Showdown};
//!
//! let board = Hand::new_from_str("H2 H5 H7 H9 HK S3 C4").unwrap();
//! assert_eq!(Category::Flush, board.rank().category);
//!
//! let straight = Hand::new_from_str("H5 S6 C7 D8 H9").unwrap();
//! assert_eq!(Showdown::FirstWins, board.compare(&straight));
//! ```
//!
//! It is not the fastest hand ranking. However it is
//! clean well tested code.
#![warn(clippy::all, rust_2018_idioms)]

/// Cards, hands, ranking and comparing.
pub mod core;
