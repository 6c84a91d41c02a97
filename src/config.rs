//! Locating the data directory and the files inside it.
//!
//! The generator reads `suits.json` and `variants.json` and writes
//! `variants.json` and `variants.txt` back into the same directory unless the
//! caller overrides individual paths.

use anyhow::{Result, bail};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "HANABI_DATA_DIR";
pub const SUITS_FILE: &str = "suits.json";
pub const VARIANTS_FILE: &str = "variants.json";
pub const LISTING_FILE: &str = "variants.txt";

/// Input and output locations for one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataPaths {
    pub suits: PathBuf,
    /// Read as the previous catalog, then overwritten with the new one.
    pub variants: PathBuf,
    pub listing: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            suits: dir.join(SUITS_FILE),
            variants: dir.join(VARIANTS_FILE),
            listing: dir.join(LISTING_FILE),
        }
    }
}

/// A directory counts as the data directory when it holds `suits.json`.
fn is_data_dir(candidate: &Path) -> bool {
    candidate.join(SUITS_FILE).is_file()
}

fn data_dir_from_hint(hint: &Path) -> Option<PathBuf> {
    if hint.as_os_str().is_empty() {
        return None;
    }
    for candidate in [hint.to_path_buf(), hint.join("data")] {
        if is_data_dir(&candidate) {
            return fs::canonicalize(candidate).ok();
        }
    }
    None
}

/// An explicitly requested directory: either the data directory itself or a
/// checkout holding `data/`. Anything else is returned unchanged so the
/// missing-file error names the path the caller gave.
pub fn resolve_data_dir(dir: &Path) -> PathBuf {
    data_dir_from_hint(dir).unwrap_or_else(|| dir.to_path_buf())
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let nested = dir.join("data");
        if is_data_dir(&nested) {
            return Some(nested);
        }
        if is_data_dir(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the data directory.
///
/// Search order: `HANABI_DATA_DIR` when it points at a data directory (or a
/// checkout containing `data/`), then upward from the working directory, then
/// upward from the executable, then the `HANABI_DATA_DIR_HINT` baked in at
/// build time. An env value that holds no `suits.json` is skipped.
pub fn find_data_dir() -> Result<PathBuf> {
    if let Some(env_dir) = env::var_os(DATA_DIR_ENV) {
        if let Some(dir) = data_dir_from_hint(Path::new(&env_dir)) {
            return Ok(dir);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(dir) = search_upwards(&cwd) {
            return Ok(dir);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(dir) = search_upwards(exe_dir) {
                return Ok(dir);
            }
        }
    }

    if let Some(hint) = option_env!("HANABI_DATA_DIR_HINT") {
        if let Some(dir) = data_dir_from_hint(Path::new(hint)) {
            return Ok(dir);
        }
    }

    bail!(
        "Unable to locate a data directory containing {SUITS_FILE}. Pass --data-dir or set {DATA_DIR_ENV}."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_live_in_the_data_dir() {
        let paths = DataPaths::in_dir(Path::new("/srv/hanabi/data"));
        assert_eq!(paths.suits, PathBuf::from("/srv/hanabi/data/suits.json"));
        assert_eq!(paths.variants, PathBuf::from("/srv/hanabi/data/variants.json"));
        assert_eq!(paths.listing, PathBuf::from("/srv/hanabi/data/variants.txt"));
    }

    #[test]
    fn upward_search_finds_nested_data_dir() {
        let root = TempDir::new().unwrap();
        let data = root.path().join("data");
        let deep = root.path().join("scripts").join("python");
        fs::create_dir_all(&data).unwrap();
        fs::create_dir_all(&deep).unwrap();
        fs::write(data.join(SUITS_FILE), "{}").unwrap();

        let found = search_upwards(&deep).unwrap();
        assert_eq!(found, fs::canonicalize(&data).unwrap());
    }

    #[test]
    fn hint_accepts_checkout_or_data_dir() {
        let root = TempDir::new().unwrap();
        let data = root.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join(SUITS_FILE), "{}").unwrap();
        let expected = fs::canonicalize(&data).unwrap();

        assert_eq!(data_dir_from_hint(root.path()), Some(expected.clone()));
        assert_eq!(data_dir_from_hint(&data), Some(expected));
        assert_eq!(data_dir_from_hint(Path::new("")), None);
    }

    #[test]
    fn explicit_dir_resolves_checkout_to_its_data_dir() {
        let root = TempDir::new().unwrap();
        let data = root.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join(SUITS_FILE), "{}").unwrap();

        let expected = fs::canonicalize(&data).unwrap();
        assert_eq!(resolve_data_dir(root.path()), expected);
        assert_eq!(resolve_data_dir(&data), expected);

        let empty = TempDir::new().unwrap();
        assert_eq!(resolve_data_dir(empty.path()), empty.path().to_path_buf());
    }
}
