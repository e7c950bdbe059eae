#![no_main]
extern crate libfuzzer_sys;
extern crate poker_eval;

use libfuzzer_sys::fuzz_target;
use poker_eval::core::{Card, CardIter, Hand, Rankable};

fuzz_target!(|cards: [Card; 7]| {
    if let Ok(h) = Hand::new_with_cards(cards.to_vec()) {
        let r_seven = h.rank();
        let r_five_max = CardIter::from(&h)
            .map(|cv| cv.rank_five())
            .max()
            .unwrap();
        assert_eq!(r_five_max, r_seven);
    }
});
