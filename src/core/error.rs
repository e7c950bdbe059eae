use thiserror::Error;

use super::Card;

/// Which part of a card token could not be decoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidCardKind {
    #[error("expected 2 characters but found {0}")]
    Length(usize),
    #[error("unable to parse suit {0:?}")]
    Suit(char),
    #[error("unable to parse value {0:?}")]
    Value(char),
}

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages.
///
/// Every error comes from parsing, none of them are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Invalid card {token:?}: {kind}")]
    InvalidCard { token: String, kind: InvalidCardKind },
    #[error("A hand must have between 5 and 7 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
}
