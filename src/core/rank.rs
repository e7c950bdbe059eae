use std::cmp::Ordering;
use std::fmt;

use tracing::{Level, event};

use super::{Card, CardIter, Hand, Value};

/// All the different possible hand categories, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to Ace all of the same suit.
    RoyalFlush,
}

impl Category {
    /// Every category, weakest first.
    pub const fn categories() -> [Category; 10] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }

    /// The english name of this category.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of a five card hand.
///
/// Ranks compare by category first, then kicker by kicker. If one
/// kicker list is a prefix of the other the longer one is stronger.
///
/// The kickers depend on the category:
///
/// * Straight, straight flush and royal flush keep only the high card
///   of the straight, `Five` for the wheel.
/// * Flush and high card keep all five values, highest first.
/// * Every other category keeps each distinct value once, the larger
///   groups first and the higher value first inside groups of the same
///   size. So a full house of twos over queens is `[Two, Queen]` and
///   two pair kings and twos with a five is `[King, Two, Five]`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rank {
    pub category: Category,
    pub kickers: Vec<Value>,
}

impl Rank {
    pub fn new(category: Category, kickers: Vec<Value>) -> Self {
        Self { category, kickers }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for (i, v) in self.kickers.iter().enumerate() {
            let sep = if i == 0 { " (" } else { ", " };
            write!(f, "{sep}{v}")?;
        }
        if !self.kickers.is_empty() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// The outcome of putting two hands against each other.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Showdown {
    FirstWins,
    SecondWins,
    Tie,
}

impl From<Ordering> for Showdown {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Showdown::FirstWins,
            Ordering::Less => Showdown::SecondWins,
            Ordering::Equal => Showdown::Tie,
        }
    }
}

impl Showdown {
    /// The same outcome seen from the other side of the table.
    pub fn reverse(self) -> Self {
        match self {
            Showdown::FirstWins => Showdown::SecondWins,
            Showdown::SecondWins => Showdown::FirstWins,
            Showdown::Tie => Showdown::Tie,
        }
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u16 = 0b1_0000_0000_1111;
/// Five values in a row starting at `Two`.
const RUN_OF_FIVE: u16 = 0b1_1111;

/// If the values make a straight return its high card.
/// The wheel (Ace to Five) is the only straight where the Ace plays low.
fn rank_straight(value_to_count: &[u8; 13]) -> Option<Value> {
    if value_to_count.iter().any(|&c| c > 1) {
        return None;
    }

    let value_set: u16 = value_to_count
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == 1)
        .fold(0, |set, (v, _)| set | 1 << v);
    if value_set.count_ones() != 5 {
        return None;
    }

    let low = value_set.trailing_zeros();
    if value_set == RUN_OF_FIVE << low {
        Value::from_index(low as usize + 4)
    } else if value_set == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// Rank exactly five cards.
fn rank_five_cards(cards: &[Card]) -> Rank {
    debug_assert_eq!(5, cards.len());

    let mut value_to_count = [0u8; 13];
    for c in cards {
        value_to_count[c.value as usize] += 1;
    }

    let is_flush = cards.windows(2).all(|w| w[0].suit == w[1].suit);
    let straight = rank_straight(&value_to_count);

    match (straight, is_flush) {
        (Some(Value::Ace), true) => return Rank::new(Category::RoyalFlush, vec![Value::Ace]),
        (Some(high), true) => return Rank::new(Category::StraightFlush, vec![high]),
        _ => {}
    }

    // Each distinct value with its count, bigger groups first and
    // higher values first inside a group size.
    let mut groups: Vec<(u8, Value)> = Value::values()
        .into_iter()
        .rev()
        .filter(|&v| value_to_count[v as usize] > 0)
        .map(|v| (value_to_count[v as usize], v))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let counts: Vec<u8> = groups.iter().map(|(c, _)| *c).collect();
    let grouped: Vec<Value> = groups.iter().map(|(_, v)| *v).collect();

    let category = match counts.as_slice() {
        [4, ..] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        _ if is_flush => Category::Flush,
        _ if straight.is_some() => Category::Straight,
        [3, ..] => Category::ThreeOfAKind,
        [2, 2, ..] => Category::TwoPair,
        [2, ..] => Category::OnePair,
        _ => Category::HighCard,
    };

    let kickers = match (category, straight) {
        (Category::Straight, Some(high)) => vec![high],
        _ => grouped,
    };

    Rank::new(category, kickers)
}

/// Rank every five card subset and keep the strongest.
/// The first subset found wins ties.
fn rank_best_cards(cards: &[Card]) -> Rank {
    let mut best: Option<Rank> = None;

    for (i, subset) in CardIter::new(cards, 5).enumerate() {
        let rank = rank_five_cards(&subset);
        if best.as_ref().is_none_or(|b| rank > *b) {
            event!(Level::TRACE, subset = i, %rank, "new_best_subset");
            best = Some(rank);
        }
    }

    best.unwrap_or_else(|| Rank::new(Category::HighCard, vec![]))
}

/// Can this turn into a hand rank? There are implementations for
/// `Hand` and for card slices.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> &[Card];

    /// Rank the cards to find the best 5 card hand.
    ///
    /// Five cards are ranked directly, seven cards by trying every
    /// five card subset. Any other count, six cards included, gives a
    /// `HighCard` with no kickers.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_eval::core::{Category, Hand, Rankable, Value};
    ///
    /// let hand = Hand::new_from_str("H2 SQ C2 D2 CQ").unwrap();
    /// let rank = hand.rank();
    /// assert_eq!(Category::FullHouse, rank.category);
    /// assert_eq!(vec![Value::Two, Value::Queen], rank.kickers);
    /// ```
    fn rank(&self) -> Rank {
        let cards = self.cards();
        match cards.len() {
            5 => rank_five_cards(cards),
            7 => rank_best_cards(cards),
            _ => Rank::new(Category::HighCard, vec![]),
        }
    }

    /// Rank a hand of exactly five cards.
    ///
    /// It doesn't do any caching so it's left up to the user to
    /// understand that duplicate work will be done if this is called
    /// more than once. Use `rank` for anything but five cards.
    fn rank_five(&self) -> Rank {
        rank_five_cards(self.cards())
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        Hand::cards(self)
    }
}

/// Rank both hands and say which one wins.
///
/// ```
/// use poker_eval::core::{Hand, Showdown, compare};
///
/// let full_house = Hand::new_from_str("H2 SQ C2 D2 CQ").unwrap();
/// let straight = Hand::new_from_str("H5 S6 C7 D8 H9").unwrap();
/// assert_eq!(Showdown::FirstWins, compare(&full_house, &straight));
/// ```
pub fn compare<A, B>(first: &A, second: &B) -> Showdown
where
    A: Rankable + ?Sized,
    B: Rankable + ?Sized,
{
    first.rank().cmp(&second.rank()).into()
}

impl Hand {
    /// Compare this hand against another one.
    pub fn compare(&self, other: &Hand) -> Showdown {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use Value::*;

    fn hand(s: &str) -> Hand {
        Hand::new_from_str(s).unwrap()
    }

    fn full_deck() -> Vec<Card> {
        Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect()
    }

    fn random_hands(seed: u64, size: usize, count: usize) -> Vec<Hand> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = full_deck();
        (0..count)
            .map(|_| {
                deck.shuffle(&mut rng);
                Hand::new_with_cards(deck[..size].to_vec()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_cmp() {
        assert!(Category::HighCard < Category::StraightFlush);
        assert!(Category::HighCard < Category::FourOfAKind);
        assert!(Category::HighCard < Category::ThreeOfAKind);
        assert!(Category::StraightFlush < Category::RoyalFlush);
        let all = Category::categories();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_category_names() {
        assert_eq!("High Card", Category::HighCard.to_string());
        assert_eq!("One Pair", Category::OnePair.to_string());
        assert_eq!("Two Pair", Category::TwoPair.to_string());
        assert_eq!("Three of a Kind", Category::ThreeOfAKind.to_string());
        assert_eq!("Full House", Category::FullHouse.to_string());
        assert_eq!("Four of a Kind", Category::FourOfAKind.to_string());
        assert_eq!("Royal Flush", Category::RoyalFlush.to_string());
    }

    #[test]
    fn test_rank_display() {
        assert_eq!("Full House (2, Q)", hand("H2 SQ C2 D2 CQ").rank().to_string());
        assert_eq!("High Card", Rank::new(Category::HighCard, vec![]).to_string());
    }

    #[test]
    fn test_high_card() {
        assert_eq!(
            Rank::new(Category::HighCard, vec![King, Nine, Seven, Five, Two]),
            hand("H2 S5 C7 D9 HK").rank()
        );
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(
            Rank::new(Category::OnePair, vec![Two, King, Seven, Five]),
            hand("H2 S2 C5 D7 HK").rank()
        );
    }

    #[test]
    fn test_two_pair() {
        assert_eq!(
            Rank::new(Category::TwoPair, vec![King, Two, Five]),
            hand("H2 S2 CK DK H5").rank()
        );
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(
            Rank::new(Category::ThreeOfAKind, vec![Two, King, Five]),
            hand("H2 S2 C2 D5 HK").rank()
        );
    }

    #[test]
    fn test_straight() {
        assert_eq!(
            Rank::new(Category::Straight, vec![Nine]),
            hand("H5 S6 C7 D8 H9").rank()
        );
        assert_eq!(
            Rank::new(Category::Straight, vec![Ace]),
            hand("HT SJ CQ DK HA").rank()
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(
            Rank::new(Category::Straight, vec![Five]),
            hand("HA H2 S3 C4 D5").rank()
        );
        // The wheel is the weakest straight.
        assert_eq!(
            Showdown::SecondWins,
            hand("HA H2 S3 C4 D5").compare(&hand("H2 S3 C4 D5 H6"))
        );
    }

    #[test]
    fn test_rank_straight_masks() {
        let mut counts = [0u8; 13];
        for low in 0..9 {
            counts.fill(0);
            counts[low..low + 5].fill(1);
            assert_eq!(Value::from_index(low + 4), rank_straight(&counts));
        }

        counts.fill(0);
        for v in [Two, Three, Four, Five, Ace] {
            counts[v as usize] = 1;
        }
        assert_eq!(Some(Five), rank_straight(&counts));

        // A gap, and a pair inside a run.
        counts.fill(0);
        for v in [Two, Three, Four, Five, Seven] {
            counts[v as usize] = 1;
        }
        assert_eq!(None, rank_straight(&counts));
        counts.fill(0);
        for v in [Six, Seven, Eight, Nine] {
            counts[v as usize] = 1;
        }
        counts[Nine as usize] = 2;
        assert_eq!(None, rank_straight(&counts));
    }

    #[test]
    fn test_no_wrap_around() {
        assert_eq!(Category::HighCard, hand("HQ SK CA D2 H3").rank().category);
        assert_eq!(Category::HighCard, hand("HJ SQ CK DA H2").rank().category);
    }

    #[test]
    fn test_flush() {
        assert_eq!(
            Rank::new(Category::Flush, vec![King, Nine, Seven, Five, Two]),
            hand("H2 H5 H7 H9 HK").rank()
        );
    }

    #[test]
    fn test_full_house() {
        assert_eq!(
            Rank::new(Category::FullHouse, vec![Two, Queen]),
            hand("H2 SQ C2 D2 CQ").rank()
        );
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(
            Rank::new(Category::FourOfAKind, vec![Two, King]),
            hand("H2 S2 C2 D2 HK").rank()
        );
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(
            Rank::new(Category::StraightFlush, vec![Nine]),
            hand("H5 H6 H7 H8 H9").rank()
        );
        assert_eq!(
            Rank::new(Category::StraightFlush, vec![Five]),
            hand("SA S2 S3 S4 S5").rank()
        );
    }

    #[test]
    fn test_royal_flush() {
        assert_eq!(
            Rank::new(Category::RoyalFlush, vec![Ace]),
            hand("HT HJ HQ HK HA").rank()
        );
    }

    #[test_log::test]
    fn test_seven_card_flush() {
        let rank = hand("H2 H5 H7 H9 HK S3 C4").rank();
        assert_eq!(
            Rank::new(Category::Flush, vec![King, Nine, Seven, Five, Two]),
            rank
        );
    }

    #[test_log::test]
    fn test_seven_card_picks_best_kickers() {
        // Aces full of kings beats aces full of queens.
        assert_eq!(
            Rank::new(Category::FullHouse, vec![Ace, King]),
            hand("HA SA CA DK HK SQ CQ").rank()
        );
        // Two trips make a full house with the lower trip as the pair.
        assert_eq!(
            Rank::new(Category::FullHouse, vec![Nine, Four]),
            hand("H9 S9 C9 D4 H4 S4 C2").rank()
        );
        // Three pairs only play the top two.
        assert_eq!(
            Rank::new(Category::TwoPair, vec![King, Queen, Jack]),
            hand("HK SK CQ DQ HJ SJ C2").rank()
        );
        // The straight flush hidden behind a higher straight.
        assert_eq!(
            Rank::new(Category::StraightFlush, vec![Eight]),
            hand("H4 H5 H6 H7 H8 S9 CT").rank()
        );
    }

    #[test]
    fn test_six_cards() {
        // Six cards parse but only five and seven card hands are ranked.
        let six = hand("S2 HT HJ HQ HK HA");
        assert_eq!(6, six.len());
        assert_eq!(Rank::new(Category::HighCard, vec![]), six.rank());
    }

    #[test]
    fn test_other_sizes() {
        let cards: Vec<Card> = ["H2", "H3", "H4"]
            .into_iter()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(Rank::new(Category::HighCard, vec![]), cards.rank());
    }

    #[test]
    fn test_compare() {
        let full_house = hand("H2 SQ C2 D2 CQ");
        let straight = hand("H5 S6 C7 D8 H9");
        assert_eq!(Showdown::FirstWins, compare(&full_house, &straight));
        assert_eq!(Showdown::SecondWins, compare(&straight, &full_house));
        assert_eq!(Showdown::Tie, compare(&straight, &hand("C5 D6 H7 S8 C9")));
    }

    #[test]
    fn test_compare_kickers() {
        // High card ace beats high card king.
        assert_eq!(
            Showdown::FirstWins,
            hand("HA SK C5 D7 H9").compare(&hand("HK SQ C5 D7 H9"))
        );
        // Higher second pair wins.
        assert_eq!(
            Showdown::FirstWins,
            hand("H2 S2 CK DK H5").compare(&hand("H2 S2 CQ DQ H5"))
        );
        // Higher trip wins the full house.
        assert_eq!(
            Showdown::SecondWins,
            hand("H3 S3 C3 D2 H2").compare(&hand("H4 S4 C4 D2 H2"))
        );
        // Higher straight wins.
        assert_eq!(
            Showdown::SecondWins,
            hand("H5 S6 C7 D8 H9").compare(&hand("H6 S7 C8 D9 HT"))
        );
        // Same pair, last kicker decides.
        assert_eq!(
            Showdown::FirstWins,
            hand("HA SA CK DQ H3").compare(&hand("CA DA SK HQ D2"))
        );
        // Flush with the same top card.
        assert_eq!(
            Showdown::FirstWins,
            hand("H2 H5 H7 H9 HK").compare(&hand("S3 S4 S7 S9 SK"))
        );
    }

    #[test]
    fn test_kicker_length_mismatch() {
        let short = Rank::new(Category::Flush, vec![King, Nine]);
        let long = Rank::new(Category::Flush, vec![King, Nine, Two]);
        assert!(long > short);
        assert_eq!(Showdown::from(long.cmp(&short)), Showdown::FirstWins);
        assert_eq!(Showdown::from(short.cmp(&short.clone())), Showdown::Tie);
    }

    #[test]
    fn test_kicker_lengths() {
        for h in random_hands(7, 5, 2000) {
            let rank = h.rank();
            let expected = match rank.category {
                Category::Straight | Category::StraightFlush | Category::RoyalFlush => 1,
                Category::FourOfAKind | Category::FullHouse => 2,
                Category::ThreeOfAKind | Category::TwoPair => 3,
                Category::OnePair => 4,
                Category::Flush | Category::HighCard => 5,
            };
            assert_eq!(expected, rank.kickers.len(), "{h} {rank}");
        }
    }

    #[test]
    fn test_idempotent() {
        for h in random_hands(11, 7, 200) {
            assert_eq!(h.rank(), h.rank());
        }
    }

    #[test]
    fn test_seven_is_max_of_subsets() {
        for h in random_hands(3, 7, 500) {
            let best = CardIter::from(&h).map(|c| c.rank_five()).max().unwrap();
            assert_eq!(best, h.rank(), "{h}");
        }
    }

    #[test]
    fn test_compare_symmetry() {
        let hands = random_hands(5, 7, 100);
        for a in &hands {
            assert_eq!(Showdown::Tie, a.compare(a));
            for b in &hands {
                assert_eq!(a.compare(b), b.compare(a).reverse());
            }
        }
    }

    #[test]
    fn test_compare_transitive() {
        let hands = random_hands(13, 5, 40);
        for a in &hands {
            for b in &hands {
                for c in &hands {
                    let ab = a.compare(b);
                    let bc = b.compare(c);
                    if ab == Showdown::FirstWins && bc == Showdown::FirstWins {
                        assert_eq!(Showdown::FirstWins, a.compare(c), "{a} / {b} / {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_all_five_card_hands() {
        let deck = full_deck();
        let mut counts = [0usize; 10];
        for cards in CardIter::new(&deck, 5) {
            counts[cards.rank_five().category as usize] += 1;
        }

        assert_eq!(1_302_540, counts[Category::HighCard as usize]);
        assert_eq!(1_098_240, counts[Category::OnePair as usize]);
        assert_eq!(123_552, counts[Category::TwoPair as usize]);
        assert_eq!(54_912, counts[Category::ThreeOfAKind as usize]);
        assert_eq!(10_200, counts[Category::Straight as usize]);
        assert_eq!(5_108, counts[Category::Flush as usize]);
        assert_eq!(3_744, counts[Category::FullHouse as usize]);
        assert_eq!(624, counts[Category::FourOfAKind as usize]);
        assert_eq!(36, counts[Category::StraightFlush as usize]);
        assert_eq!(4, counts[Category::RoyalFlush as usize]);
        assert_eq!(2_598_960, counts.iter().sum::<usize>());
    }
}
