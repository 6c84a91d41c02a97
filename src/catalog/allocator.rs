//! Stable id assignment for generated variants.
//!
//! Names already present in the previous catalog keep their id. New names get
//! the lowest id no previous entry holds, scanning forward from a cursor that
//! never moves back during a run: ids are handed out in the order names are
//! first requested, and a retired variant's id is never given to a different
//! name. Rescanning from zero on every call would reorder allocations when
//! several new names compete for the same gap.

use crate::catalog::identity::VariantId;
use crate::catalog::previous::PreviousCatalog;
use std::collections::HashMap;
use tracing::info;

#[derive(Debug)]
/// Per-run allocator; construct one for each regeneration.
pub struct IdAllocator<'a> {
    previous: &'a PreviousCatalog,
    next_candidate: u32,
    assigned: HashMap<String, VariantId>,
    introduced: Vec<(String, VariantId)>,
}

impl<'a> IdAllocator<'a> {
    pub fn new(previous: &'a PreviousCatalog) -> Self {
        Self {
            previous,
            next_candidate: 0,
            assigned: HashMap::new(),
            introduced: Vec::new(),
        }
    }

    /// Return the id for `name`, allocating one if the name is new.
    ///
    /// Asking again for a new name returns the id it was first given.
    pub fn assign(&mut self, name: &str) -> VariantId {
        if let Some(id) = self.previous.id_of(name) {
            return id;
        }
        if let Some(id) = self.assigned.get(name) {
            return *id;
        }

        let id = self.next_free();
        info!(variant = name, id = id.0, "allocated id for new variant");
        self.assigned.insert(name.to_string(), id);
        self.introduced.push((name.to_string(), id));
        id
    }

    /// Names that received a fresh id, in allocation order.
    pub fn introduced(&self) -> &[(String, VariantId)] {
        &self.introduced
    }

    pub fn into_introduced(self) -> Vec<(String, VariantId)> {
        self.introduced
    }

    fn next_free(&mut self) -> VariantId {
        loop {
            let candidate = VariantId(self.next_candidate);
            self.next_candidate += 1;
            if !self.previous.id_in_use(candidate) {
                return candidate;
            }
        }
    }
}
