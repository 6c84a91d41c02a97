//! Variant catalog wiring.
//!
//! `previous` loads and validates the published `variants.json`, `allocator`
//! keeps ids stable against it, and `model` holds the freshly generated
//! catalog in generation order until it is written back out.

pub mod allocator;
pub mod identity;
pub mod model;
pub mod previous;

pub use allocator::IdAllocator;
pub use identity::{SpecialRank, VariantId};
pub use model::{Modifiers, Variant, VariantCatalog, special_key};
pub use previous::{PreviousCatalog, RecordedVariant};
