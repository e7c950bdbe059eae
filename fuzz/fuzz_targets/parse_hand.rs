#![no_main]
extern crate libfuzzer_sys;
extern crate poker_eval;

use std::str;

use libfuzzer_sys::fuzz_target;
use poker_eval::core::{Hand, Rankable};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        // Parsing must never panic, and whatever parses must rank.
        if let Ok(h) = Hand::new_from_str(s) {
            assert!((Hand::MIN_CARDS..=Hand::MAX_CARDS).contains(&h.len()));
            assert_eq!(h, Hand::new_from_str(&h.to_string()).unwrap());
            h.rank();
        }
    }
});
