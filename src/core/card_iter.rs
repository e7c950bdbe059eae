use super::{Card, Hand};

/// Iterate over every `num_cards` sized subset of a set of cards.
///
/// Subsets come out in lexicographic order of their indices, so
/// for seven cards the first is `[0, 1, 2, 3, 4]` and the last is
/// `[2, 3, 4, 5, 6]`.
///
/// # Examples
///
/// ```
/// use poker_eval::core::{CardIter, Hand};
///
/// let hand = Hand::new_from_str("H2 H5 H7 H9 HK S3 C4").unwrap();
/// assert_eq!(21, CardIter::new(hand.cards(), 5).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be picked.
    possible_cards: &'a [Card],
    /// Offsets of the subset that will be yielded next.
    idx: Vec<usize>,
    /// Set once every subset was yielded.
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }

    /// Move `idx` to the next subset. Returns false once the last one
    /// was passed.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.idx.len();

        // Find the rightmost offset that can still move forward and
        // leave room for every offset to its right.
        let Some(level) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return false;
        };

        self.idx[level] += 1;
        for i in level + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result_cards: Vec<Card> = self
            .idx
            .iter()
            .map(|&i| self.possible_cards[i])
            .collect();

        self.done = !self.advance();
        Some(result_cards)
    }
}

/// Iterating a hand gives back every 5 card hand in it.
///
/// Useful for trying to find the best 5 card hand from 7 cards.
impl<'a> From<&'a Hand> for CardIter<'a> {
    fn from(hand: &'a Hand) -> Self {
        CardIter::new(hand.cards(), 5)
    }
}
