//! Guard against variants silently disappearing between regenerations.
//!
//! Live replays and shared seeds reference variants by id, so a rule-table
//! edit that stops producing an existing name must fail the run instead of
//! quietly dropping it.

use crate::catalog::{PreviousCatalog, VariantCatalog};
use crate::error::CatalogError;

/// Previous names absent from `generated`, in previous-catalog order.
///
/// Collects every miss rather than stopping at the first so one run reports
/// the whole problem.
pub fn missing_variants(previous: &PreviousCatalog, generated: &VariantCatalog) -> Vec<String> {
    previous
        .names()
        .filter(|name| !generated.contains(name))
        .map(str::to_string)
        .collect()
}

/// Fail with [`CatalogError::Regression`] when any previous name vanished.
pub fn check_regressions(
    previous: &PreviousCatalog,
    generated: &VariantCatalog,
) -> Result<(), CatalogError> {
    let missing = missing_variants(previous, generated);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Regression { missing })
    }
}
