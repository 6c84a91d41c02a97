use thiserror::Error;

use crate::catalog::VariantId;

/// Fatal conditions raised by the generation core.
///
/// Both kinds are terminal: the fix is to correct the input data and rerun.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("The variant of \"{name}\" does not have an \"id\" field.")]
    MissingId { name: String },

    #[error("There is a duplicate ID of {id} (\"{previous_name}\" and \"{name}\").")]
    DuplicateId {
        id: VariantId,
        name: String,
        previous_name: String,
    },

    #[error("{} previously existing variant(s) were not regenerated:\n{}", .missing.len(), format_missing(.missing))]
    Regression { missing: Vec<String> },
}

fn format_missing(missing: &[String]) -> String {
    missing
        .iter()
        .map(|name| format!("Missing variant: {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}
