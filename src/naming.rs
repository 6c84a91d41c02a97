//! Exact-string variant names.
//!
//! A variant's name is its identity across regenerations, so every format
//! here is frozen: changing a single character orphans the id recorded for
//! the old spelling and trips the regression check.

use crate::catalog::SpecialRank;

/// Appended to a suit name to mark stacks that are played downward.
pub const REVERSED_SUFFIX: &str = " Reversed";

/// `"<base> (<count> Suits)"`
pub fn with_count(base: &str, count: usize) -> String {
    format!("{base} ({count} Suits)")
}

/// `"<a> & <b> (<count> Suits)"`
pub fn combined(a: &str, b: &str, count: usize) -> String {
    with_count(&format!("{a} & {b}"), count)
}

/// `"<Suit>-Ones"` / `"<Suit>-Fives"`, hyphenating multi-word suit names.
pub fn special_rank_prefix(suit: &str, rank: SpecialRank) -> String {
    format!("{}-{}", suit.replace(' ', "-"), rank.word())
}

pub fn reversed(suit: &str) -> String {
    format!("{suit}{REVERSED_SUFFIX}")
}

/// Upper-case the first alphabetic character of `value`.
///
/// Leading non-alphabetic characters pass through unchanged, as does a value
/// with no alphabetic characters at all.
pub fn upper_first(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    for ch in chars.by_ref() {
        if ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            break;
        }
        out.push(ch);
    }
    out.extend(chars);
    out
}
