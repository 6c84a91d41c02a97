//! Plain decks played under an extra rule: blind and mute clues, Alternating
//! Clues, Clue Starved, Cow & Pig, Duck, Throw It in a Hole, Reversed and
//! Up or Down.

use super::{Generator, SUIT_COUNTS, too_constrained};
use crate::catalog::Modifiers;
use crate::naming::{REVERSED_SUFFIX, combined, reversed as reversed_name, with_count};

/// Which special suits a modifier family is also combined with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extension {
    /// Plain decks only.
    None,
    /// Every special suit, except one-of-each suits in decks of 4 or fewer.
    SmallDecksExcludeOneOfEach,
    /// Every special suit that is not one-of-each.
    ExcludeOneOfEach,
}

/// A rule applied on top of the plain decks, named `"<label> (<N> Suits)"`
/// and, when extended, `"<label> & <Suit> (<N> Suits)"`.
#[derive(Debug)]
pub struct ModifierFamily {
    pub label: &'static str,
    pub counts: &'static [usize],
    pub modifiers: fn() -> Modifiers,
    pub extension: Extension,
}

pub(super) const COLOR_BLIND: ModifierFamily = ModifierFamily {
    label: "Color Blind",
    counts: &SUIT_COUNTS,
    modifiers: color_blind,
    extension: Extension::None,
};

pub(super) const NUMBER_BLIND: ModifierFamily = ModifierFamily {
    label: "Number Blind",
    counts: &SUIT_COUNTS,
    modifiers: number_blind,
    extension: Extension::None,
};

pub(super) const TOTALLY_BLIND: ModifierFamily = ModifierFamily {
    label: "Totally Blind",
    counts: &SUIT_COUNTS,
    modifiers: totally_blind,
    extension: Extension::None,
};

pub(super) const COLOR_MUTE: ModifierFamily = ModifierFamily {
    label: "Color Mute",
    counts: &SUIT_COUNTS,
    modifiers: color_mute,
    extension: Extension::None,
};

pub(super) const NUMBER_MUTE: ModifierFamily = ModifierFamily {
    label: "Number Mute",
    counts: &SUIT_COUNTS,
    modifiers: number_mute,
    extension: Extension::None,
};

pub(super) const ALTERNATING_CLUES: ModifierFamily = ModifierFamily {
    label: "Alternating Clues",
    counts: &SUIT_COUNTS,
    modifiers: Modifiers::default,
    extension: Extension::SmallDecksExcludeOneOfEach,
};

// 4 and 3 suits would be too difficult.
pub(super) const CLUE_STARVED: ModifierFamily = ModifierFamily {
    label: "Clue Starved",
    counts: &[6, 5],
    modifiers: Modifiers::default,
    extension: Extension::ExcludeOneOfEach,
};

pub(super) const COW_AND_PIG: ModifierFamily = ModifierFamily {
    label: "Cow & Pig",
    counts: &SUIT_COUNTS,
    modifiers: Modifiers::default,
    extension: Extension::None,
};

pub(super) const DUCK: ModifierFamily = ModifierFamily {
    label: "Duck",
    counts: &SUIT_COUNTS,
    modifiers: Modifiers::default,
    extension: Extension::None,
};

// "Throw It in a Hole & Black (6 Suits)" needs 1.88 efficiency at 5 players.
pub(super) const THROW_IT_IN_A_HOLE: ModifierFamily = ModifierFamily {
    label: "Throw It in a Hole",
    counts: &[6, 5, 4],
    modifiers: Modifiers::default,
    extension: Extension::ExcludeOneOfEach,
};

pub(super) const UP_OR_DOWN: ModifierFamily = ModifierFamily {
    label: "Up or Down",
    counts: &[6, 5],
    modifiers: Modifiers::show_suit_names,
    extension: Extension::ExcludeOneOfEach,
};

fn color_blind() -> Modifiers {
    Modifiers {
        color_clues_touch_nothing: true,
        ..Modifiers::default()
    }
}

fn number_blind() -> Modifiers {
    Modifiers {
        rank_clues_touch_nothing: true,
        ..Modifiers::default()
    }
}

fn totally_blind() -> Modifiers {
    Modifiers {
        color_clues_touch_nothing: true,
        rank_clues_touch_nothing: true,
        ..Modifiers::default()
    }
}

fn color_mute() -> Modifiers {
    Modifiers {
        clue_colors: Some(Vec::new()),
        ..Modifiers::default()
    }
}

fn number_mute() -> Modifiers {
    Modifiers {
        clue_ranks: Some(Vec::new()),
        ..Modifiers::default()
    }
}

pub(super) fn apply_family(generator: &mut Generator<'_>, family: &ModifierFamily) {
    let stacks = generator.stacks();
    for &count in family.counts {
        generator.emit(
            with_count(family.label, count),
            stacks.plain(count).to_vec(),
            (family.modifiers)(),
        );
    }

    if family.extension == Extension::None {
        return;
    }
    for (suit_name, suit) in generator.suits().variant_suits() {
        if family.extension == Extension::ExcludeOneOfEach && suit.one_of_each {
            continue;
        }
        for &count in family.counts {
            if too_constrained(count, suit) {
                continue;
            }
            generator.emit(
                combined(family.label, suit_name, count),
                stacks.with_extras(count, &[suit_name]),
                (family.modifiers)(),
            );
        }
    }
}

/// Reversed stacks are played from 5 down to 1; the reversed suit carries a
/// " Reversed" suffix. The plain version reverses the last plain suit.
pub(super) fn reversed(generator: &mut Generator<'_>) {
    let stacks = generator.stacks();
    for count in SUIT_COUNTS {
        let mut suits = stacks.plain(count).to_vec();
        if let Some(last) = suits.last_mut() {
            last.push_str(REVERSED_SUFFIX);
        }
        generator.emit_plain(with_count("Reversed", count), suits);
    }

    for (suit_name, suit) in generator.suits().variant_suits() {
        // With rank clues altered the reversed suit plays exactly like the
        // normal one.
        if suit.alters_rank_clues() {
            continue;
        }
        let reversed_suit = reversed_name(suit_name);
        for count in SUIT_COUNTS {
            if too_constrained(count, suit) {
                continue;
            }
            generator.emit_plain(
                with_count(&reversed_suit, count),
                stacks.with_extras(count, &[reversed_suit.as_str()]),
            );
        }
    }
}
