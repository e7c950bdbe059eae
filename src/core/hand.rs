use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;

use tracing::{Level, event};

use super::{Card, PokerError};

/// A hand of 5, 6 or 7 distinct cards.
///
/// Cards are kept in the order they were given. The order doesn't
/// matter when ranking but it's kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Card>", into = "Vec<Card>")
)]
pub struct Hand(Vec<Card>);

impl Hand {
    /// The fewest cards a hand can hold.
    pub const MIN_CARDS: usize = 5;
    /// The most cards a hand can hold.
    pub const MAX_CARDS: usize = 7;

    /// Build a hand from cards that are already decoded.
    ///
    /// # Errors
    ///
    /// `InvalidHandSize` if there are not 5 to 7 cards and
    /// `DuplicateCard` for the first card that is seen twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_eval::core::{Card, Hand, PokerError, Suit, Value};
    ///
    /// let ace = Card::new(Value::Ace, Suit::Club);
    /// let result = Hand::new_with_cards(vec![ace, ace]);
    /// assert_eq!(Err(PokerError::InvalidHandSize(2)), result);
    /// ```
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        if !(Self::MIN_CARDS..=Self::MAX_CARDS).contains(&cards.len()) {
            return Err(PokerError::InvalidHandSize(cards.len()));
        }

        let mut seen: u64 = 0;
        for &c in &cards {
            mark_seen(&mut seen, c)?;
        }

        Ok(Self(cards))
    }

    /// Parse a whitespace separated list of cards such as `"H2 SQ C2 D2 CQ"`.
    ///
    /// The token count is checked before any token is decoded. Then
    /// tokens are decoded left to right and each card is checked against
    /// the ones before it, so the first bad token decides the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_eval::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("H2 SQ C2 D2 CQ").unwrap();
    /// assert_eq!(5, hand.len());
    /// assert_eq!(Card::new(Value::Queen, Suit::Spade), hand[1]);
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let result = Self::parse_tokens(hand_string);
        if let Err(e) = &result {
            event!(Level::DEBUG, input = hand_string, error = %e, "hand_rejected");
        }
        result
    }

    fn parse_tokens(hand_string: &str) -> Result<Self, PokerError> {
        let tokens: Vec<&str> = hand_string.split_whitespace().collect();
        if !(Self::MIN_CARDS..=Self::MAX_CARDS).contains(&tokens.len()) {
            return Err(PokerError::InvalidHandSize(tokens.len()));
        }

        let mut cards = Vec::with_capacity(tokens.len());
        let mut seen: u64 = 0;
        for token in tokens {
            let c = Card::from_str(token)?;
            mark_seen(&mut seen, c)?;
            cards.push(c);
        }

        Ok(Self(cards))
    }

    /// How many cards are in the hand.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a hand built through the checked constructors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(c)
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.0.iter()
    }

    /// The cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

/// Set the bit for a card, failing if it was already set.
fn mark_seen(seen: &mut u64, c: Card) -> Result<(), PokerError> {
    let bit = 1u64 << u8::from(c);
    if *seen & bit != 0 {
        return Err(PokerError::DuplicateCard(c));
    }
    *seen |= bit;
    Ok(())
}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = PokerError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new_with_cards(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
