//! Plain-deck suit sequences ("Base Stack Tables").
//!
//! Built once per run from the fixed color progression and never mutated;
//! every rule that needs a plain deck of `n` suits reads it from here.

/// Largest plain deck the game supports.
pub const MAX_SUITS: usize = 6;

/// Suits appended as the deck grows from one suit upward. The second element
/// is where the new color is inserted so that stacks stay in rainbow order.
const PROGRESSION: [(&str, InsertAt); MAX_SUITS] = [
    ("Red", InsertAt::End),
    ("Blue", InsertAt::End),
    ("Green", InsertAt::Index(1)),
    ("Yellow", InsertAt::Index(1)),
    ("Purple", InsertAt::End),
    ("Teal", InsertAt::End),
];

#[derive(Clone, Copy)]
enum InsertAt {
    End,
    Index(usize),
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// Immutable lookup table from suit count to its plain suit sequence.
pub struct BaseStacks {
    // Index 0 is the empty deck so that `stacks[n]` has `n` suits.
    stacks: Vec<Vec<String>>,
}

impl BaseStacks {
    pub fn new() -> Self {
        let mut stacks: Vec<Vec<String>> = Vec::with_capacity(MAX_SUITS + 1);
        stacks.push(Vec::new());
        for (suit, position) in PROGRESSION {
            let mut next = stacks.last().cloned().unwrap_or_default();
            match position {
                InsertAt::End => next.push(suit.to_string()),
                InsertAt::Index(index) => next.insert(index, suit.to_string()),
            }
            stacks.push(next);
        }
        Self { stacks }
    }

    /// The plain deck of `count` suits.
    ///
    /// Panics when `count` exceeds [`MAX_SUITS`]; callers only pass the fixed
    /// suit counts the generation rules enumerate.
    pub fn plain(&self, count: usize) -> &[String] {
        &self.stacks[count]
    }

    /// A plain deck of `count - extras.len()` suits followed by `extras`, so
    /// the result always holds `count` suits.
    pub fn with_extras(&self, count: usize, extras: &[&str]) -> Vec<String> {
        let mut suits = self.plain(count - extras.len()).to_vec();
        suits.extend(extras.iter().map(|suit| suit.to_string()));
        suits
    }
}

impl Default for BaseStacks {
    fn default() -> Self {
        Self::new()
    }
}
