//! JSON Schema checks for the two input documents.
//!
//! Both `suits.json` and `variants.json` are validated before typed decoding
//! so structural mistakes (a string where a flag belongs, a negative id) are
//! reported all at once with their JSON pointers instead of failing on the
//! first serde error. The schemas are compiled into the binary; they describe
//! shape only and never suit semantics.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

const SUITS_SCHEMA: &str = include_str!("../schema/suits.schema.json");
const VARIANTS_SCHEMA: &str = include_str!("../schema/variants.schema.json");

/// Which input document a value claims to be.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DocumentKind {
    Suits,
    Variants,
}

impl DocumentKind {
    fn label(self) -> &'static str {
        match self {
            DocumentKind::Suits => "suit catalog",
            DocumentKind::Variants => "variant catalog",
        }
    }

    fn schema_source(self) -> &'static str {
        match self {
            DocumentKind::Suits => SUITS_SCHEMA,
            DocumentKind::Variants => VARIANTS_SCHEMA,
        }
    }
}

pub(crate) fn load_json_schema(kind: DocumentKind) -> Result<JSONSchema> {
    let raw: Value = serde_json::from_str(kind.schema_source())
        .map_err(|err| anyhow!("parsing embedded {} schema: {err}", kind.label()))?;
    let compiled = JSONSchema::compile(&raw)
        .map_err(|err| anyhow!("compiling embedded {} schema: {err}", kind.label()))?;
    Ok(compiled)
}

/// Compiled schema for `kind`, built on first use and shared afterwards.
fn compiled_schema(kind: DocumentKind) -> Result<&'static JSONSchema> {
    static SUITS: OnceLock<JSONSchema> = OnceLock::new();
    static VARIANTS: OnceLock<JSONSchema> = OnceLock::new();

    let cell = match kind {
        DocumentKind::Suits => &SUITS,
        DocumentKind::Variants => &VARIANTS,
    };
    if let Some(schema) = cell.get() {
        return Ok(schema);
    }
    let loaded = load_json_schema(kind)?;
    Ok(cell.get_or_init(|| loaded))
}

/// Validate `document` against the schema for `kind`, reporting every
/// violation in one error.
pub(crate) fn validate_document(kind: DocumentKind, document: &Value) -> Result<()> {
    let schema = compiled_schema(kind)?;
    if let Err(errors) = schema.validate(document) {
        let details = errors
            .map(|err| format!("{}: {err}", display_pointer(&err.instance_path.to_string())))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{} failed schema validation:\n{}", kind.label(), details);
    }
    Ok(())
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() { "/" } else { pointer }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_schemas_compile() {
        load_json_schema(DocumentKind::Suits).unwrap();
        load_json_schema(DocumentKind::Variants).unwrap();
    }

    #[test]
    fn compiled_schemas_are_reused() {
        let first = compiled_schema(DocumentKind::Variants).unwrap();
        let second = compiled_schema(DocumentKind::Variants).unwrap();
        assert!(std::ptr::eq(first, second));
        let suits = compiled_schema(DocumentKind::Suits).unwrap();
        assert!(!std::ptr::eq(first, suits));
    }

    #[test]
    fn unknown_suit_properties_pass() {
        let suits = json!({
            "Rainbow": {
                "createVariants": true,
                "allClueColors": true,
                "abbreviation": "M",
                "fillColors": ["#ff0000", "#00ff00"]
            }
        });
        validate_document(DocumentKind::Suits, &suits).unwrap();
    }

    #[test]
    fn every_violation_is_reported() {
        let variants = json!({
            "No Variant": {"id": -1, "suits": ["Red"]},
            "6 Suits": {"id": 1, "suits": "Red"}
        });
        let err = validate_document(DocumentKind::Variants, &variants).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("variant catalog failed schema validation"));
        assert!(message.contains("/No Variant/id"), "{message}");
        assert!(message.contains("/6 Suits/suits"), "{message}");
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = validate_document(DocumentKind::Suits, &json!(["Red"])).unwrap_err();
        assert!(err.to_string().contains("/:"), "{err}");
    }
}
