//! Bakes an optional fallback data directory into the binary.
//!
//! Set `HANABI_DATA_DIR_HINT` at build time to the game checkout (or its
//! `data/` directory) when the installed binary should find the catalogs
//! without `--data-dir`. Nothing is baked when it is unset.

use std::env;
use std::path::{Path, PathBuf};

const HINT_VAR: &str = "HANABI_DATA_DIR_HINT";

fn holds_suits(dir: &Path) -> bool {
    dir.join("suits.json").is_file() || dir.join("data").join("suits.json").is_file()
}

fn main() {
    println!("cargo:rerun-if-env-changed={HINT_VAR}");

    let Some(raw_hint) = env::var_os(HINT_VAR).filter(|hint| !hint.is_empty()) else {
        return;
    };
    let candidate = PathBuf::from(raw_hint);
    let hint = candidate.canonicalize().unwrap_or(candidate);
    if !holds_suits(&hint) {
        println!(
            "cargo:warning={HINT_VAR}={} holds neither suits.json nor data/suits.json",
            hint.display()
        );
    }
    println!("cargo:rustc-env={HINT_VAR}={}", hint.display());
}
