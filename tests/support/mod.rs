#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the `create-variants` binary cargo built for this test run.
pub fn create_variants_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_create-variants"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// A small suit catalog covering each kind of special suit.
pub fn fixture_suits() -> Value {
    json!({
        "Red": {"abbreviation": "R"},
        "Yellow": {},
        "Green": {},
        "Blue": {},
        "Purple": {},
        "Teal": {},
        "Rainbow": {"createVariants": true, "allClueColors": true},
        "White": {"createVariants": true, "noClueColors": true},
        "Brown": {"createVariants": true, "noClueRanks": true},
        "Black": {"createVariants": true, "oneOfEach": true}
    })
}

/// Temporary data directory laid out like the game repository's `data/`.
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    pub fn new(suits: &Value, variants: &Value) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate data dir")?;
        let data = Self { dir };
        data.write_suits(suits)?;
        data.write_variants(variants)?;
        Ok(data)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn suits_path(&self) -> PathBuf {
        self.path().join("suits.json")
    }

    pub fn variants_path(&self) -> PathBuf {
        self.path().join("variants.json")
    }

    pub fn listing_path(&self) -> PathBuf {
        self.path().join("variants.txt")
    }

    pub fn write_suits(&self, suits: &Value) -> Result<()> {
        fs::write(self.suits_path(), serde_json::to_string_pretty(suits)?)
            .context("writing suits.json")
    }

    pub fn write_variants(&self, variants: &Value) -> Result<()> {
        fs::write(self.variants_path(), serde_json::to_string_pretty(variants)?)
            .context("writing variants.json")
    }

    pub fn read_variants_text(&self) -> Result<String> {
        fs::read_to_string(self.variants_path()).context("reading variants.json")
    }

    pub fn read_variants(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.read_variants_text()?)?)
    }

    pub fn read_listing(&self) -> Result<String> {
        fs::read_to_string(self.listing_path()).context("reading variants.txt")
    }

    /// `create-variants --data-dir <dir>` with logging quieted.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(create_variants_bin());
        cmd.arg("--data-dir")
            .arg(self.path())
            .arg("--log-level")
            .arg("warn")
            .env_remove("RUST_LOG")
            .env_remove("HANABI_DATA_DIR");
        cmd
    }

    /// Run the CLI and expect success.
    pub fn create_variants(&self) -> Result<Output> {
        run_command(self.command())
    }
}

/// Name to id mapping of a rendered catalog.
pub fn ids(catalog: &Value) -> Vec<(String, u64)> {
    catalog
        .as_object()
        .map(|entries| {
            entries
                .iter()
                .map(|(name, entry)| (name.clone(), entry["id"].as_u64().unwrap_or(u64::MAX)))
                .collect()
        })
        .unwrap_or_default()
}
