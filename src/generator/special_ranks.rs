//! "-Ones" and "-Fives" variants.
//!
//! The special rank behaves like the named suit under clues while the suit
//! itself is absent from the deck, e.g. "Rainbow-Ones (6 Suits)" is a plain
//! six-suit deck whose 1s are touched by every color clue.

use super::{Generator, SUIT_COUNTS, too_constrained};
use crate::catalog::{Modifiers, SpecialRank};
use crate::naming::{combined, special_rank_prefix, with_count};
use crate::suits::Suit;

pub(super) fn special_ranks(generator: &mut Generator<'_>) {
    let stacks = generator.stacks();
    let suits = generator.suits();

    for rank in SpecialRank::ALL {
        for (suit_name, suit) in suits.variant_suits() {
            // There are no e.g. Black-Ones.
            if suit.one_of_each {
                continue;
            }
            let prefix = special_rank_prefix(suit_name, rank);

            for count in SUIT_COUNTS {
                generator.emit(
                    with_count(&prefix, count),
                    stacks.plain(count).to_vec(),
                    special_rank_modifiers(rank, suit),
                );
            }

            // "Rainbow-Ones & Rainbow (6 Suits)" and friends.
            for (second_name, second) in suits.variant_suits() {
                for count in SUIT_COUNTS {
                    if too_constrained(count, second) {
                        continue;
                    }
                    generator.emit(
                        combined(&prefix, second_name, count),
                        stacks.with_extras(count, &[second_name]),
                        special_rank_modifiers(rank, suit),
                    );
                }
            }
        }
    }
}

fn special_rank_modifiers(rank: SpecialRank, suit: &Suit) -> Modifiers {
    Modifiers {
        special_rank: Some(rank),
        special_flags: suit.clue_flags().collect(),
        clue_ranks: suit
            .alters_rank_clues()
            .then(|| rank.remaining_clue_ranks()),
        ..Modifiers::default()
    }
}
