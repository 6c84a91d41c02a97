//! Writes `variants.json` and `variants.txt`.
//!
//! The JSON layout must stay byte-compatible with the catalog already checked
//! into the game repository: two-space indentation, `": "` separators, ASCII
//! only (everything else as lowercase `\uXXXX`), trailing newline. Both files
//! are staged next to their destinations and only persisted once both have
//! been rendered and written.

use crate::catalog::VariantCatalog;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Pretty formatter that escapes every non-ASCII character.
pub struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    pub fn new() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for AsciiFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Render the catalog in the published `variants.json` format.
pub fn render_catalog(catalog: &VariantCatalog) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, AsciiFormatter::new());
    catalog
        .serialize(&mut serializer)
        .context("serializing variant catalog")?;
    buffer.push(b'\n');
    String::from_utf8(buffer).context("variant catalog rendered invalid UTF-8")
}

/// One name per line in generation order, followed by a blank line.
pub fn render_listing(catalog: &VariantCatalog) -> String {
    let mut contents = String::new();
    for name in catalog.names() {
        contents.push_str(name);
        contents.push('\n');
    }
    contents.push('\n');
    contents
}

/// Write both outputs, leaving the destinations untouched if anything fails
/// before the final renames.
///
/// Each rename is atomic but the pair is not. The listing goes first: it is
/// derived from the catalog, so a failure between the two renames leaves the
/// previous `variants.json` in place and a rerun repairs the listing.
pub fn write_outputs(catalog: &VariantCatalog, variants_path: &Path, listing_path: &Path) -> Result<()> {
    let json = render_catalog(catalog)?;
    let listing = render_listing(catalog);

    let staged_json = stage(variants_path, &json)?;
    let staged_listing = stage(listing_path, &listing)?;

    staged_listing
        .persist(listing_path)
        .with_context(|| format!("replacing {}", listing_path.display()))?;
    staged_json
        .persist(variants_path)
        .with_context(|| format!("replacing {}", variants_path.display()))?;
    Ok(())
}

fn stage(destination: &Path, contents: &str) -> Result<NamedTempFile> {
    let dir = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("staging {}", destination.display()))?;
    file.flush()
        .with_context(|| format!("staging {}", destination.display()))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Modifiers, Variant, VariantId};
    use tempfile::TempDir;

    fn sample() -> VariantCatalog {
        let mut catalog = VariantCatalog::new();
        catalog.insert(
            "No Variant".to_string(),
            Variant {
                id: VariantId(0),
                suits: vec!["Red".into(), "Blue".into()],
                modifiers: Modifiers::default(),
            },
        );
        catalog.insert(
            "Color Mute (3 Suits)".to_string(),
            Variant {
                id: VariantId(1),
                suits: vec!["Red".into()],
                modifiers: Modifiers {
                    clue_colors: Some(Vec::new()),
                    show_suit_names: true,
                    ..Modifiers::default()
                },
            },
        );
        catalog
    }

    #[test]
    fn catalog_layout_matches_published_format() {
        let rendered = render_catalog(&sample()).unwrap();
        let expected = "{\n  \"No Variant\": {\n    \"id\": 0,\n    \"suits\": [\n      \"Red\",\n      \"Blue\"\n    ]\n  },\n  \"Color Mute (3 Suits)\": {\n    \"id\": 1,\n    \"suits\": [\n      \"Red\"\n    ],\n    \"clueColors\": [],\n    \"showSuitNames\": true\n  }\n}\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn non_ascii_is_escaped() {
        let mut catalog = VariantCatalog::new();
        catalog.insert(
            "Café ✓ 🂡".to_string(),
            Variant {
                id: VariantId(7),
                suits: vec!["Crème \"Brûlée\"".into()],
                modifiers: Modifiers::default(),
            },
        );
        let rendered = render_catalog(&catalog).unwrap();
        assert!(rendered.is_ascii());
        assert!(
            rendered.contains(r#""Caf\u00e9 \u2713 \ud83c\udca1""#),
            "{rendered}"
        );
        assert!(
            rendered.contains(r#""Cr\u00e8me \"Br\u00fbl\u00e9e\"""#),
            "{rendered}"
        );
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["Café ✓ 🂡"]["suits"][0], "Crème \"Brûlée\"");
    }

    #[test]
    fn listing_ends_with_blank_line() {
        assert_eq!(
            render_listing(&sample()),
            "No Variant\nColor Mute (3 Suits)\n\n"
        );
        assert_eq!(render_listing(&VariantCatalog::new()), "\n");
    }

    #[test]
    fn write_outputs_replaces_both_files() {
        let dir = TempDir::new().unwrap();
        let variants = dir.path().join("variants.json");
        let listing = dir.path().join("variants.txt");
        std::fs::write(&variants, "{}\n").unwrap();

        write_outputs(&sample(), &variants, &listing).unwrap();

        assert_eq!(
            std::fs::read_to_string(&variants).unwrap(),
            render_catalog(&sample()).unwrap()
        );
        assert_eq!(
            std::fs::read_to_string(&listing).unwrap(),
            "No Variant\nColor Mute (3 Suits)\n\n"
        );
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 2);
    }

    #[test]
    fn failed_listing_replace_keeps_previous_catalog() {
        let dir = TempDir::new().unwrap();
        let variants = dir.path().join("variants.json");
        let listing = dir.path().join("variants.txt");
        std::fs::write(&variants, "{}\n").unwrap();
        // A non-empty directory cannot be replaced by a file rename.
        std::fs::create_dir(&listing).unwrap();
        std::fs::write(listing.join("keep"), "").unwrap();

        let err = write_outputs(&sample(), &variants, &listing).unwrap_err();
        assert!(format!("{err:#}").contains("replacing"), "{err:#}");
        assert_eq!(std::fs::read_to_string(&variants).unwrap(), "{}\n");
        // The error owns the staged listing until it is dropped.
        drop(err);
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers.len(), 2, "{leftovers:?}");
    }
}
