//! Shared utilities for integration tests.
//!
//! Provides message builders and proptest strategies that mix plain GSM
//! characters, extension table characters, BMP characters outside the GSM
//! alphabet and characters that need a surrogate pair.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use proptest::{
    collection::vec,
    prelude::{Just, Strategy, prop_oneof},
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner},
};
use smsplit::{CharsetSelector, HeaderSize};

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// `count` plain GSM characters.
pub fn gsm_text(count: usize) -> String { "-".repeat(count) }

/// `count` BMP characters outside the GSM alphabet.
pub fn ucs2_text(count: usize) -> String { "°".repeat(count) }

pub fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

pub fn message_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => Just('-'),
        2 => Just('a'),
        2 => Just('€'),
        1 => Just('{'),
        1 => Just('°'),
        1 => Just('🐿'),
        1 => Just('Ω'),
    ]
}

/// Messages long enough to need several fragments in either charset.
pub fn message_strategy(max_chars: usize) -> impl Strategy<Value = String> {
    vec(message_char_strategy(), 0..max_chars).prop_map(|chars| chars.into_iter().collect())
}

/// Messages built only from the GSM alphabet, extension characters included.
pub fn gsm_message_strategy(max_chars: usize) -> impl Strategy<Value = String> {
    vec(
        prop_oneof![8 => Just('-'), 2 => Just('€'), 1 => Just('^')],
        0..max_chars,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

pub fn selector_strategy() -> impl Strategy<Value = CharsetSelector> {
    prop_oneof![
        Just(CharsetSelector::Auto),
        Just(CharsetSelector::Gsm),
        Just(CharsetSelector::Unicode),
    ]
}

pub fn header_strategy() -> impl Strategy<Value = HeaderSize> {
    prop_oneof![Just(HeaderSize::Six), Just(HeaderSize::Seven)]
}
