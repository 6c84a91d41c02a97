//! Hand-authored suit catalog (`data/suits.json`).
//!
//! Only the rule-participation flags matter to variant generation; every other
//! suit property (abbreviations, fill colors, clue colors) is ignored here and
//! left for the game client. Missing flags deserialize as `false`, which is the
//! defaulting contract the rest of the crate assumes.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::schema_loader::{DocumentKind, validate_document};

/// Boolean clue-interaction properties a suit can carry.
///
/// The declaration order is the order `special*` modifiers are written for
/// special-rank variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ClueFlag {
    AllClueColors,
    AllClueRanks,
    NoClueColors,
    NoClueRanks,
}

impl ClueFlag {
    pub const ALL: [ClueFlag; 4] = [
        ClueFlag::AllClueColors,
        ClueFlag::AllClueRanks,
        ClueFlag::NoClueColors,
        ClueFlag::NoClueRanks,
    ];

    /// Field name as it appears in `suits.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            ClueFlag::AllClueColors => "allClueColors",
            ClueFlag::AllClueRanks => "allClueRanks",
            ClueFlag::NoClueColors => "noClueColors",
            ClueFlag::NoClueRanks => "noClueRanks",
        }
    }

    pub fn touches_ranks(self) -> bool {
        matches!(self, ClueFlag::AllClueRanks | ClueFlag::NoClueRanks)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Rule-participation flags for a single suit.
pub struct Suit {
    #[serde(default)]
    pub create_variants: bool,
    #[serde(default)]
    pub one_of_each: bool,
    #[serde(default)]
    pub all_clue_colors: bool,
    #[serde(default)]
    pub all_clue_ranks: bool,
    #[serde(default)]
    pub no_clue_colors: bool,
    #[serde(default)]
    pub no_clue_ranks: bool,
}

impl Suit {
    pub fn has(&self, flag: ClueFlag) -> bool {
        match flag {
            ClueFlag::AllClueColors => self.all_clue_colors,
            ClueFlag::AllClueRanks => self.all_clue_ranks,
            ClueFlag::NoClueColors => self.no_clue_colors,
            ClueFlag::NoClueRanks => self.no_clue_ranks,
        }
    }

    /// Flags set on this suit, in `ClueFlag::ALL` order.
    pub fn clue_flags(&self) -> impl Iterator<Item = ClueFlag> + '_ {
        ClueFlag::ALL.into_iter().filter(|flag| self.has(*flag))
    }

    /// Two suits with the same profile behave identically under clues, so
    /// pairing them produces nothing new (e.g. Rainbow + Dark Rainbow).
    pub fn same_clue_profile(&self, other: &Suit) -> bool {
        ClueFlag::ALL
            .into_iter()
            .all(|flag| self.has(flag) == other.has(flag))
    }

    /// True when rank clues behave differently on this suit.
    pub fn alters_rank_clues(&self) -> bool {
        self.clue_flags().any(ClueFlag::touches_ranks)
    }
}

#[derive(Clone, Debug, Default)]
/// Suits keyed by name, in authoring order.
pub struct SuitCatalog {
    suits: IndexMap<String, Suit>,
}

impl SuitCatalog {
    pub fn new(suits: IndexMap<String, Suit>) -> Self {
        Self { suits }
    }

    /// Parse a suit catalog document, validating its shape first.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_document(DocumentKind::Suits, &value)?;
        let suits: IndexMap<String, Suit> =
            serde_json::from_value(value).context("decoding suit catalog")?;
        Ok(Self::new(suits))
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data).context("parsing suit catalog JSON")?;
        Self::from_value(value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_str(&data).with_context(|| format!("loading {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.suits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suits.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Suit> {
        self.suits.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Suit)> {
        self.suits.iter().map(|(name, suit)| (name.as_str(), suit))
    }

    /// Suits flagged `createVariants`, in catalog order. Basic colors such as
    /// Red never get variants of their own.
    pub fn variant_suits(&self) -> impl Iterator<Item = (&str, &Suit)> {
        self.iter().filter(|(_, suit)| suit.create_variants)
    }
}
