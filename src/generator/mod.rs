//! Ordered variant generation.
//!
//! [`RULES`] is walked front to back and every emitted variant asks the
//! [`IdAllocator`] for its id at the moment it is emitted. The table order is
//! therefore part of the output contract: when several new variants compete
//! for freed ids, the one emitted first gets the lowest.
//!
//! Count cutoffs throughout the rule modules drop combinations whose required
//! efficiency is out of reach for human players; they decide which names
//! exist at all and must not drift.

mod clue_modifiers;
mod combinations;
mod fixed_sets;
mod special_ranks;

use crate::catalog::{IdAllocator, Modifiers, PreviousCatalog, Variant, VariantCatalog, VariantId};
use crate::stacks::BaseStacks;
use crate::suits::{Suit, SuitCatalog};
use clue_modifiers::ModifierFamily;
use tracing::{debug, warn};

/// Suit counts most families are generated for, in emission order.
pub const SUIT_COUNTS: [usize; 4] = [6, 5, 4, 3];

/// One step of the generation sequence.
pub struct Rule {
    pub name: &'static str,
    kind: RuleKind,
}

enum RuleKind {
    Emit(fn(&mut Generator<'_>)),
    Family(&'static ModifierFamily),
}

impl Rule {
    const fn emit(name: &'static str, apply: fn(&mut Generator<'_>)) -> Self {
        Self {
            name,
            kind: RuleKind::Emit(apply),
        }
    }

    const fn family(family: &'static ModifierFamily) -> Self {
        Self {
            name: family.label,
            kind: RuleKind::Family(family),
        }
    }

    fn apply(&self, generator: &mut Generator<'_>) {
        match self.kind {
            RuleKind::Emit(apply) => apply(generator),
            RuleKind::Family(family) => clue_modifiers::apply_family(generator, family),
        }
    }
}

pub const RULES: &[Rule] = &[
    Rule::emit("basic decks", combinations::basic_decks),
    Rule::emit("single special suits", combinations::single_special_suits),
    Rule::emit("special suit pairs", combinations::special_suit_pairs),
    Rule::emit("special ranks", special_ranks::special_ranks),
    Rule::emit("Ambiguous", fixed_sets::ambiguous),
    Rule::emit("Very Ambiguous", fixed_sets::very_ambiguous),
    Rule::emit("Extremely Ambiguous", fixed_sets::extremely_ambiguous),
    Rule::emit("Dual-Color", fixed_sets::dual_color),
    Rule::emit("mixes", fixed_sets::mixes),
    Rule::family(&clue_modifiers::COLOR_BLIND),
    Rule::family(&clue_modifiers::NUMBER_BLIND),
    Rule::family(&clue_modifiers::TOTALLY_BLIND),
    Rule::family(&clue_modifiers::COLOR_MUTE),
    Rule::family(&clue_modifiers::NUMBER_MUTE),
    Rule::family(&clue_modifiers::ALTERNATING_CLUES),
    Rule::family(&clue_modifiers::CLUE_STARVED),
    Rule::family(&clue_modifiers::COW_AND_PIG),
    Rule::family(&clue_modifiers::DUCK),
    Rule::family(&clue_modifiers::THROW_IT_IN_A_HOLE),
    Rule::emit("Reversed", clue_modifiers::reversed),
    Rule::family(&clue_modifiers::UP_OR_DOWN),
];

/// Result of a full generation pass.
#[derive(Debug)]
pub struct Generated {
    pub catalog: VariantCatalog,
    /// Names that were not in the previous catalog, with their new ids.
    pub introduced: Vec<(String, VariantId)>,
}

/// Collects variants emitted by the rules into the output catalog.
pub struct Generator<'a> {
    suits: &'a SuitCatalog,
    stacks: &'a BaseStacks,
    allocator: IdAllocator<'a>,
    catalog: VariantCatalog,
}

impl<'a> Generator<'a> {
    pub fn new(
        suits: &'a SuitCatalog,
        stacks: &'a BaseStacks,
        previous: &'a PreviousCatalog,
    ) -> Self {
        Self {
            suits,
            stacks,
            allocator: IdAllocator::new(previous),
            catalog: VariantCatalog::new(),
        }
    }

    pub fn suits(&self) -> &'a SuitCatalog {
        self.suits
    }

    pub fn stacks(&self) -> &'a BaseStacks {
        self.stacks
    }

    /// Register a variant under `name`, fetching its id from the allocator.
    pub fn emit(&mut self, name: String, suits: Vec<String>, modifiers: Modifiers) {
        let id = self.allocator.assign(&name);
        let variant = Variant {
            id,
            suits,
            modifiers,
        };
        if self.catalog.insert(name.clone(), variant).is_some() {
            warn!(variant = %name, "variant emitted twice; keeping the later definition");
        }
    }

    pub fn emit_plain(&mut self, name: String, suits: Vec<String>) {
        self.emit(name, suits, Modifiers::default());
    }

    /// Run every rule in order and hand back the finished catalog.
    pub fn run(mut self) -> Generated {
        for rule in RULES {
            let before = self.catalog.len();
            rule.apply(&mut self);
            debug!(
                rule = rule.name,
                emitted = self.catalog.len() - before,
                "generation rule finished"
            );
        }
        Generated {
            catalog: self.catalog,
            introduced: self.allocator.into_introduced(),
        }
    }
}

/// Generate the full catalog for `suits`, keeping ids stable against
/// `previous`.
pub fn generate(suits: &SuitCatalog, previous: &PreviousCatalog) -> Generated {
    let stacks = BaseStacks::new();
    Generator::new(suits, &stacks, previous).run()
}

/// One-of-each suits leave too little slack in decks of four suits or fewer.
pub(crate) fn too_constrained(count: usize, suit: &Suit) -> bool {
    count <= 4 && suit.one_of_each
}


#[cfg(test)]
mod tests {
    use super::test_support::{catalog, special};
    use super::*;
    use crate::suits::Suit;

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<&str> = RULES.iter().map(|rule| rule.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn empty_suit_catalog_still_yields_fixed_variants() {
        let generated = generate(&SuitCatalog::default(), &PreviousCatalog::default());
        let names: Vec<&str> = generated.catalog.names().collect();
        assert_eq!(&names[..4], ["No Variant", "6 Suits", "4 Suits", "3 Suits"]);
        assert!(generated.catalog.contains("Special Mix (6 Suits)"));
        assert!(generated.catalog.contains("Up or Down (5 Suits)"));
        assert!(!names.iter().any(|name| name.contains(" & ") && name.contains("Teal")));
    }

    #[test]
    fn fresh_catalog_ids_follow_generation_order() {
        let suits = catalog(&[("Red", Suit::default()), ("Rainbow", special())]);
        let generated = generate(&suits, &PreviousCatalog::default());
        for (index, (_, variant)) in generated.catalog.iter().enumerate() {
            assert_eq!(variant.id, VariantId(index as u32));
        }
        assert_eq!(generated.introduced.len(), generated.catalog.len());
    }

    #[test]
    fn small_decks_reject_one_of_each() {
        let black = super::test_support::one_of_each();
        assert!(too_constrained(4, &black));
        assert!(too_constrained(3, &black));
        assert!(!too_constrained(5, &black));
        assert!(!too_constrained(3, &special()));
    }
}
