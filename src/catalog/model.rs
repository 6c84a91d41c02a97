//! Generated variant definitions and the ordered output catalog.
//!
//! Serialization is hand-written so the key order matches the historical
//! `variants.json` layout exactly and the `special*` keys are derived from the
//! suit flag they mirror.

use crate::catalog::identity::{SpecialRank, VariantId};
use crate::naming::upper_first;
use crate::suits::ClueFlag;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Optional rule modifiers attached to a variant.
///
/// Boolean modifiers are written only when set; list modifiers only when
/// present. An empty `clue_colors` or `clue_ranks` list is meaningful ("no
/// clues of this kind") and is written as `[]`.
pub struct Modifiers {
    pub special_rank: Option<SpecialRank>,
    /// Clue flags of the special suit carried onto the special rank.
    pub special_flags: Vec<ClueFlag>,
    pub clue_ranks: Option<Vec<u8>>,
    pub color_clues_touch_nothing: bool,
    pub rank_clues_touch_nothing: bool,
    pub clue_colors: Option<Vec<String>>,
    pub show_suit_names: bool,
}

impl Modifiers {
    pub fn show_suit_names() -> Self {
        Self {
            show_suit_names: true,
            ..Self::default()
        }
    }

    fn entry_count(&self) -> usize {
        usize::from(self.special_rank.is_some())
            + self.special_flags.len()
            + usize::from(self.clue_ranks.is_some())
            + usize::from(self.color_clues_touch_nothing)
            + usize::from(self.rank_clues_touch_nothing)
            + usize::from(self.clue_colors.is_some())
            + usize::from(self.show_suit_names)
    }

    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        if let Some(rank) = self.special_rank {
            map.serialize_entry("specialRank", &rank.rank())?;
        }
        for flag in &self.special_flags {
            map.serialize_entry(&special_key(*flag), &true)?;
        }
        if let Some(ranks) = &self.clue_ranks {
            map.serialize_entry("clueRanks", ranks)?;
        }
        if self.color_clues_touch_nothing {
            map.serialize_entry("colorCluesTouchNothing", &true)?;
        }
        if self.rank_clues_touch_nothing {
            map.serialize_entry("rankCluesTouchNothing", &true)?;
        }
        if let Some(colors) = &self.clue_colors {
            map.serialize_entry("clueColors", colors)?;
        }
        if self.show_suit_names {
            map.serialize_entry("showSuitNames", &true)?;
        }
        Ok(())
    }
}

/// Output key for a suit flag propagated onto a special rank, e.g.
/// `allClueColors` becomes `specialAllClueColors`.
pub fn special_key(flag: ClueFlag) -> String {
    format!("special{}", upper_first(flag.as_str()))
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// One playable variant. Suit order is part of the definition: it fixes the
/// in-game stack order.
pub struct Variant {
    pub id: VariantId,
    pub suits: Vec<String>,
    pub modifiers: Modifiers,
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2 + self.modifiers.entry_count()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("suits", &self.suits)?;
        self.modifiers.serialize_entries(&mut map)?;
        map.end()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
/// Variants keyed by name, in generation order.
pub struct VariantCatalog {
    variants: IndexMap<String, Variant>,
}

impl VariantCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a variant. Re-inserting an existing name replaces its definition
    /// but keeps its original position.
    pub fn insert(&mut self, name: String, variant: Variant) -> Option<Variant> {
        self.variants.insert(name, variant)
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.variants.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.variants
            .iter()
            .map(|(name, variant)| (name.as_str(), variant))
    }
}
