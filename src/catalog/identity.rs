use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable numeric identity of a variant.
///
/// Ids are embedded in shared seed strings (e.g. `p2v5s1`), so once a name
/// has an id it keeps it for as long as the name exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Rank whose cards follow the special suit's clue rules in "-Ones" and
/// "-Fives" variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialRank {
    Ones,
    Fives,
}

impl SpecialRank {
    /// Generation order of the special-rank families.
    pub const ALL: [SpecialRank; 2] = [SpecialRank::Ones, SpecialRank::Fives];

    pub fn rank(self) -> u8 {
        match self {
            SpecialRank::Ones => 1,
            SpecialRank::Fives => 5,
        }
    }

    pub fn word(self) -> &'static str {
        match self {
            SpecialRank::Ones => "Ones",
            SpecialRank::Fives => "Fives",
        }
    }

    /// Ranks 1 through 5 minus this one; the clue ranks left once the
    /// special rank no longer takes ordinary rank clues.
    pub fn remaining_clue_ranks(self) -> Vec<u8> {
        (1..=5).filter(|rank| *rank != self.rank()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_id_is_a_bare_number_on_the_wire() {
        let id = VariantId(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let parsed: VariantId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, VariantId(7));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn remaining_clue_ranks_drop_the_special_rank() {
        assert_eq!(SpecialRank::Ones.remaining_clue_ranks(), [2, 3, 4, 5]);
        assert_eq!(SpecialRank::Fives.remaining_clue_ranks(), [1, 2, 3, 4]);
    }
}
