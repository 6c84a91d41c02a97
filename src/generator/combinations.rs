//! Plain decks and special suits added on top of them.

use super::{Generator, SUIT_COUNTS, too_constrained};
use crate::naming::{combined, with_count};
use std::collections::HashSet;

pub(super) fn basic_decks(generator: &mut Generator<'_>) {
    let stacks = generator.stacks();
    generator.emit_plain("No Variant".to_string(), stacks.plain(5).to_vec());
    for count in [6, 4, 3] {
        generator.emit_plain(format!("{count} Suits"), stacks.plain(count).to_vec());
    }
}

/// "Rainbow (6 Suits)": one special suit in place of the last plain suit.
pub(super) fn single_special_suits(generator: &mut Generator<'_>) {
    let stacks = generator.stacks();
    for (suit_name, suit) in generator.suits().variant_suits() {
        for count in SUIT_COUNTS {
            if too_constrained(count, suit) {
                continue;
            }
            generator.emit_plain(
                with_count(suit_name, count),
                stacks.with_extras(count, &[suit_name]),
            );
        }
    }
}

/// "Rainbow & White (6 Suits)": two special suits with different clue
/// behavior. Each unordered pair is emitted once, under the order the suits
/// first meet in the catalog.
pub(super) fn special_suit_pairs(generator: &mut Generator<'_>) {
    let stacks = generator.stacks();
    let suits = generator.suits();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for (first_name, first) in suits.variant_suits() {
        for (second_name, second) in suits.variant_suits() {
            if first_name == second_name || first.same_clue_profile(second) {
                continue;
            }
            if seen.contains(&(second_name, first_name)) || !seen.insert((first_name, second_name))
            {
                continue;
            }

            for count in SUIT_COUNTS {
                if too_constrained(count, first) || too_constrained(count, second) {
                    continue;
                }
                // Two one-of-each suits only fit in the largest deck.
                if count == 5 && first.one_of_each && second.one_of_each {
                    continue;
                }
                generator.emit_plain(
                    combined(first_name, second_name, count),
                    stacks.with_extras(count, &[first_name, second_name]),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{catalog, names, one_of_each, run, special};
    use crate::suits::{Suit, SuitCatalog};

    #[test]
    fn basic_decks_are_emitted_in_fixed_order() {
        let generated = run(&SuitCatalog::default(), super::basic_decks);
        assert_eq!(names(&generated), ["No Variant", "6 Suits", "4 Suits", "3 Suits"]);
        assert_eq!(
            generated.catalog.get("No Variant").unwrap().suits,
            ["Red", "Yellow", "Green", "Blue", "Purple"]
        );
        assert_eq!(
            generated.catalog.get("3 Suits").unwrap().suits,
            ["Red", "Green", "Blue"]
        );
    }

    #[test]
    fn single_suits_skip_basic_colors_and_small_one_of_each_decks() {
        let suits = catalog(&[
            ("Red", Suit::default()),
            ("Rainbow", special()),
            ("Black", one_of_each()),
        ]);
        let generated = run(&suits, super::single_special_suits);
        assert_eq!(
            names(&generated),
            [
                "Rainbow (6 Suits)",
                "Rainbow (5 Suits)",
                "Rainbow (4 Suits)",
                "Rainbow (3 Suits)",
                "Black (6 Suits)",
                "Black (5 Suits)",
            ]
        );
        assert_eq!(
            generated.catalog.get("Rainbow (4 Suits)").unwrap().suits,
            ["Red", "Green", "Blue", "Rainbow"]
        );
    }

    #[test]
    fn pairs_skip_identical_profiles_and_mirrored_duplicates() {
        let rainbow = Suit {
            all_clue_colors: true,
            ..special()
        };
        let dark_rainbow = Suit {
            all_clue_colors: true,
            ..one_of_each()
        };
        let white = Suit {
            no_clue_colors: true,
            ..special()
        };
        let suits = catalog(&[
            ("Rainbow", rainbow),
            ("Dark Rainbow", dark_rainbow),
            ("White", white),
        ]);
        let generated = run(&suits, super::special_suit_pairs);
        assert_eq!(
            names(&generated),
            [
                "Rainbow & White (6 Suits)",
                "Rainbow & White (5 Suits)",
                "Rainbow & White (4 Suits)",
                "Rainbow & White (3 Suits)",
                "Dark Rainbow & White (6 Suits)",
                "Dark Rainbow & White (5 Suits)",
            ]
        );
        assert_eq!(
            generated.catalog.get("Rainbow & White (5 Suits)").unwrap().suits,
            ["Red", "Green", "Blue", "Rainbow", "White"]
        );
    }

    #[test]
    fn two_one_of_each_suits_only_pair_in_six_suit_decks() {
        let black = one_of_each();
        let dark_white = Suit {
            no_clue_colors: true,
            ..one_of_each()
        };
        let suits = catalog(&[("Black", black), ("Dark White", dark_white)]);
        let generated = run(&suits, super::special_suit_pairs);
        assert_eq!(names(&generated), ["Black & Dark White (6 Suits)"]);
    }

    #[test]
    fn same_name_never_pairs_with_itself() {
        let suits = catalog(&[("Rainbow", special())]);
        let generated = run(&suits, super::special_suit_pairs);
        assert!(generated.catalog.is_empty());
    }
}
