//! Generator for the Hanabi variant catalog.
//!
//! Reads the suit catalog and the previously published variant catalog,
//! regenerates every variant from the ordered rule table, and writes
//! `variants.json` plus the `variants.txt` name listing. Ids already handed
//! out are never changed; new variants take the lowest ids nobody holds.
//!
//! The public surface is what `create-variants` uses: input loading,
//! [`regenerate`] (generation plus the regression check), and [`run`] which
//! also handles the writes.

use anyhow::Result;
use tracing::info;

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod output;
pub mod regression;
pub(crate) mod schema_loader;
pub mod stacks;
pub mod suits;

pub use catalog::{
    IdAllocator, Modifiers, PreviousCatalog, RecordedVariant, SpecialRank, Variant,
    VariantCatalog, VariantId, special_key,
};
pub use config::{DataPaths, find_data_dir};
pub use error::CatalogError;
pub use generator::{Generated, RULES, generate};
pub use output::{render_catalog, render_listing, write_outputs};
pub use regression::{check_regressions, missing_variants};
pub use suits::{ClueFlag, Suit, SuitCatalog};

/// Generate the catalog and refuse it if any previous variant disappeared.
pub fn regenerate(
    suits: &SuitCatalog,
    previous: &PreviousCatalog,
) -> Result<Generated, CatalogError> {
    let generated = generate(suits, previous);
    check_regressions(previous, &generated.catalog)?;
    Ok(generated)
}

/// Outcome of a successful [`run`].
#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub introduced: Vec<(String, VariantId)>,
    /// False for dry runs.
    pub written: bool,
}

/// Load both inputs, regenerate, and write the outputs unless `dry_run`.
///
/// Nothing is written when loading, generation, or the regression check
/// fails.
pub fn run(paths: &DataPaths, dry_run: bool) -> Result<RunSummary> {
    let previous = PreviousCatalog::load(&paths.variants)?;
    info!(
        path = %paths.variants.display(),
        variants = previous.len(),
        "loaded previous variant catalog"
    );
    let suits = SuitCatalog::load(&paths.suits)?;
    info!(
        path = %paths.suits.display(),
        suits = suits.len(),
        "loaded suit catalog"
    );

    let generated = regenerate(&suits, &previous)?;
    info!(
        total = generated.catalog.len(),
        new = generated.introduced.len(),
        "generated variant catalog"
    );
    if !generated.introduced.is_empty() {
        let names: Vec<&str> = generated
            .introduced
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        info!(variants = ?names, "introduced new variants");
    }

    if dry_run {
        info!("dry run; leaving outputs untouched");
    } else {
        write_outputs(&generated.catalog, &paths.variants, &paths.listing)?;
        info!(
            variants = %paths.variants.display(),
            listing = %paths.listing.display(),
            "wrote variant catalog"
        );
    }

    Ok(RunSummary {
        total: generated.catalog.len(),
        introduced: generated.introduced,
        written: !dry_run,
    })
}
