//! Hand-picked suit sets: ambiguous colors, dual colors, and fixed mixes.
//!
//! These suits share colors with each other, so players need the suit names
//! on screen (`showSuitNames`) to tell the stacks apart.

use super::{Generator, too_constrained};
use crate::catalog::Modifiers;
use crate::naming::with_count;

const RED_AMBIGUOUS: [&str; 2] = ["Tomato", "Mahogany"];
const GREEN_AMBIGUOUS: [&str; 2] = ["Lime", "Forest"];
const BLUE_AMBIGUOUS: [&str; 2] = ["Sky", "Navy"];

const VERY_AMBIGUOUS: [&str; 6] = [
    "Tomato VA",
    "Ruby VA",
    "Mahogany VA",
    "Sky VA",
    "Berry VA",
    "Navy VA",
];

const EXTREMELY_AMBIGUOUS_3: [&str; 3] = ["Sky VA", "Berry VA", "Navy VA"];
const EXTREMELY_AMBIGUOUS_6: [&str; 6] = [
    "Ice EA",
    "Sapphire EA",
    "Sky EA",
    "Berry EA",
    "Navy EA",
    "Ocean EA",
];

const DUAL_COLOR_3: [&str; 3] = ["Orange D2", "Purple D", "Green D"];
const DUAL_COLOR_5: [&str; 5] = ["Orange D2", "Lime D", "Teal D", "Indigo D", "Cardinal D"];
const DUAL_COLOR_6: [&str; 6] = [
    "Orange D",
    "Purple D",
    "Mahogany D",
    "Green D",
    "Tan D",
    "Navy D",
];

/// Fixed variants that are not derived from suit flags at all.
const MIXES: [(&str, &[&str], bool); 5] = [
    (
        "Special Mix (5 Suits)",
        &["Black", "Rainbow", "Pink", "White", "Brown"],
        false,
    ),
    (
        "Special Mix (6 Suits)",
        &["Black", "Rainbow", "Pink", "White", "Brown", "Null"],
        false,
    ),
    (
        "Ambiguous Mix",
        &["Tomato", "Mahogany", "Sky", "Navy", "Black", "White"],
        true,
    ),
    (
        "Dual-Color Mix",
        &["Orange D2", "Purple D", "Green D", "Black", "Rainbow", "White"],
        false,
    ),
    (
        "Ambiguous & Dual-Color",
        &[
            "Tangelo AD",
            "Peach AD",
            "Orchid AD",
            "Violet AD",
            "Lime AD",
            "Forest AD",
        ],
        true,
    ),
];

/// A family of fixed suit tables keyed by suit count, plus the counts each
/// special suit may be appended to.
struct SuitSetFamily {
    label: &'static str,
    /// Counts emitted on their own, in order.
    counts: &'static [usize],
    /// Table sizes a special suit is appended to, in order.
    extended: &'static [usize],
    table: fn(usize) -> Vec<&'static str>,
}

const AMBIGUOUS: SuitSetFamily = SuitSetFamily {
    label: "Ambiguous",
    counts: &[6, 4],
    extended: &[4, 2],
    table: ambiguous_table,
};

const EXTREMELY_AMBIGUOUS: SuitSetFamily = SuitSetFamily {
    label: "Extremely Ambiguous",
    counts: &[6, 5, 4, 3],
    extended: &[5, 4, 3],
    table: extremely_ambiguous_table,
};

const DUAL_COLOR: SuitSetFamily = SuitSetFamily {
    label: "Dual-Color",
    counts: &[6, 5, 3],
    extended: &[5, 3],
    table: dual_color_table,
};

fn ambiguous_table(count: usize) -> Vec<&'static str> {
    match count {
        2 => RED_AMBIGUOUS.to_vec(),
        4 => [RED_AMBIGUOUS, BLUE_AMBIGUOUS].concat(),
        _ => [RED_AMBIGUOUS, GREEN_AMBIGUOUS, BLUE_AMBIGUOUS].concat(),
    }
}

fn extremely_ambiguous_table(count: usize) -> Vec<&'static str> {
    match count {
        3 => EXTREMELY_AMBIGUOUS_3.to_vec(),
        _ => EXTREMELY_AMBIGUOUS_6[..count].to_vec(),
    }
}

fn dual_color_table(count: usize) -> Vec<&'static str> {
    match count {
        3 => DUAL_COLOR_3.to_vec(),
        5 => DUAL_COLOR_5.to_vec(),
        _ => DUAL_COLOR_6.to_vec(),
    }
}

pub(super) fn ambiguous(generator: &mut Generator<'_>) {
    emit_suit_set_family(generator, &AMBIGUOUS);
}

pub(super) fn very_ambiguous(generator: &mut Generator<'_>) {
    generator.emit(
        with_count("Very Ambiguous", 6),
        owned(&VERY_AMBIGUOUS),
        Modifiers::show_suit_names(),
    );
}

pub(super) fn extremely_ambiguous(generator: &mut Generator<'_>) {
    emit_suit_set_family(generator, &EXTREMELY_AMBIGUOUS);
}

pub(super) fn dual_color(generator: &mut Generator<'_>) {
    emit_suit_set_family(generator, &DUAL_COLOR);
}

pub(super) fn mixes(generator: &mut Generator<'_>) {
    for (name, suits, show_suit_names) in MIXES {
        let modifiers = Modifiers {
            show_suit_names,
            ..Modifiers::default()
        };
        generator.emit(name.to_string(), owned(suits), modifiers);
    }
}

fn emit_suit_set_family(generator: &mut Generator<'_>, family: &SuitSetFamily) {
    for &count in family.counts {
        generator.emit(
            with_count(family.label, count),
            owned(&(family.table)(count)),
            Modifiers::show_suit_names(),
        );
    }

    for (suit_name, suit) in generator.suits().variant_suits() {
        for &base in family.extended {
            let count = base + 1;
            if too_constrained(count, suit) {
                continue;
            }
            let mut suits = owned(&(family.table)(base));
            suits.push(suit_name.to_string());
            generator.emit(
                with_count(&format!("{} & {suit_name}", family.label), count),
                suits,
                Modifiers::show_suit_names(),
            );
        }
    }
}

fn owned(suits: &[&str]) -> Vec<String> {
    suits.iter().map(|suit| suit.to_string()).collect()
}
