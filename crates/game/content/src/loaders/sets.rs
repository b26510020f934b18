//! Set directory loader.

use std::fs;
use std::path::{Path, PathBuf};

use armorset_core::{SetDefinition, SetId, SetRegistry};
use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::loaders::format::{SetSection, scalar_key};
use crate::loaders::{EntryError, LoadError, LoadResult, read_file};

/// File written into a freshly created set directory.
pub const EXAMPLE_SET_FILE: &str = "example.yml";

const EXAMPLE_SET: &str = include_str!("../../data/sets/example.yml");

/// An entry (or whole file) that was left out of the registry.
#[derive(Debug)]
pub struct SkippedEntry {
    pub file: PathBuf,
    /// `None` when the whole file was skipped.
    pub set: Option<SetId>,
    pub reason: EntryError,
}

/// Result of loading a set directory.
#[derive(Debug)]
pub struct LoadOutcome {
    pub registry: SetRegistry,
    pub skipped: Vec<SkippedEntry>,
    /// True if the directory was missing and the example file was written.
    pub seeded: bool,
    /// Number of set files read.
    pub files: usize,
}

/// Loads every `*.yml` / `*.yaml` file of a directory into one registry.
///
/// Files are read in file-name order and entries in document order, which
/// fixes the registry order. A set id that appears again in a later file
/// replaces the earlier definition.
#[derive(Clone, Debug)]
pub struct SetLoader {
    dir: PathBuf,
}

impl SetLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Builds a fresh registry from the directory.
    ///
    /// Creates the directory and seeds [`EXAMPLE_SET_FILE`] if it does not
    /// exist yet. Broken files and entries are skipped and reported in
    /// [`LoadOutcome::skipped`]; only directory-level I/O fails the load.
    pub fn load(&self) -> LoadResult<LoadOutcome> {
        let seeded = self.ensure_dir()?;
        let files = self.set_files()?;

        let mut outcome = LoadOutcome {
            registry: SetRegistry::new(),
            skipped: Vec::new(),
            seeded,
            files: files.len(),
        };
        for path in &files {
            load_file(path, &mut outcome);
        }

        info!(
            target: "armorset::registry",
            dir = %self.dir.display(),
            files = outcome.files,
            sets = outcome.registry.len(),
            skipped = outcome.skipped.len(),
            "Loaded set definitions"
        );
        Ok(outcome)
    }

    fn ensure_dir(&self) -> LoadResult<bool> {
        if self.dir.is_dir() {
            return Ok(false);
        }

        fs::create_dir_all(&self.dir).map_err(|source| LoadError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let example = self.dir.join(EXAMPLE_SET_FILE);
        fs::write(&example, EXAMPLE_SET).map_err(|source| LoadError::Seed {
            path: example.clone(),
            source,
        })?;

        info!(
            target: "armorset::registry",
            file = %example.display(),
            "Created set directory with example file"
        );
        Ok(true)
    }

    fn set_files(&self) -> LoadResult<Vec<PathBuf>> {
        let read_dir_error = |source| LoadError::ReadDir {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_dir_error)? {
            let path = entry.map_err(read_dir_error)?.path();
            if path.is_file() && is_set_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_set_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml" | "yaml")
    )
}

fn load_file(path: &Path, outcome: &mut LoadOutcome) {
    let entries = match read_entries(path) {
        Ok(entries) => entries,
        Err(reason) => {
            skip(outcome, path, None, reason);
            return;
        }
    };

    for (key, section) in entries {
        let Some(id) = scalar_key(&key).map(SetId::new) else {
            let text = format!("{key:?}");
            skip(outcome, path, Some(SetId::new(text.clone())), EntryError::NonScalarKey(text));
            continue;
        };

        let definition = match load_entry(&id, section) {
            Ok(definition) => definition,
            Err(reason) => {
                skip(outcome, path, Some(id), reason);
                continue;
            }
        };

        match outcome.registry.insert(definition) {
            Ok(Some(previous)) => warn!(
                target: "armorset::registry",
                file = %path.display(),
                set = %previous.id(),
                "Set defined again, replacing earlier definition"
            ),
            Ok(None) => debug!(
                target: "armorset::registry",
                file = %path.display(),
                set = %id,
                "Loaded set"
            ),
            Err(err) => skip(outcome, path, Some(id), err.into()),
        }
    }
}

/// Reads the top-level mapping of a file. An empty file has no entries.
fn read_entries(path: &Path) -> Result<serde_yaml::Mapping, EntryError> {
    let content = read_file(path)?;
    match serde_yaml::from_str(&content).map_err(EntryError::Parse)? {
        Value::Null => Ok(serde_yaml::Mapping::new()),
        Value::Mapping(entries) => Ok(entries),
        _ => Err(EntryError::NotAMapping),
    }
}

fn load_entry(id: &SetId, section: Value) -> Result<SetDefinition, EntryError> {
    SetSection::from_value(id, section)?.into_definition(id.clone())
}

fn skip(outcome: &mut LoadOutcome, path: &Path, set: Option<SetId>, reason: EntryError) {
    warn!(
        target: "armorset::registry",
        file = %path.display(),
        set = set.as_ref().map(SetId::as_str),
        error = %reason,
        "Skipping set definition"
    );
    outcome.skipped.push(SkippedEntry {
        file: path.to_path_buf(),
        set,
        reason,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    fn ids(outcome: &LoadOutcome) -> Vec<&str> {
        outcome.registry.ids().map(SetId::as_str).collect()
    }

    #[test]
    fn missing_directory_is_created_and_seeded() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("sets");

        let outcome = SetLoader::new(&dir).load().unwrap();

        assert!(outcome.seeded);
        assert!(dir.join(EXAMPLE_SET_FILE).is_file());
        assert_eq!(ids(&outcome), vec!["dragon", "shadow"]);
        assert!(outcome.skipped.is_empty());

        let dragon = outcome.registry.get("dragon").unwrap();
        assert_eq!(dragon.name(), "&6Dragon's embrace");
        assert_eq!(dragon.total_pieces(), 4);
    }

    #[test]
    fn existing_directory_is_not_seeded() {
        let dir = TempDir::new().unwrap();

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert!(!outcome.seeded);
        assert!(outcome.registry.is_empty());
        assert!(!dir.path().join(EXAMPLE_SET_FILE).exists());
    }

    #[test]
    fn broken_entry_does_not_affect_siblings() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "sets.yml",
            r#"
good:
  name: "Good Set"
  attributes:
    "2": ["desc_A"]
bad:
  name: "Bad Set"
  attributes:
    "two": ["desc_B"]
scalar: 5
"#,
        );

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert_eq!(ids(&outcome), vec!["good"]);
        let skipped: Vec<_> = outcome
            .skipped
            .iter()
            .map(|entry| entry.set.as_ref().map(SetId::as_str))
            .collect();
        assert_eq!(skipped, vec![Some("bad"), Some("scalar")]);
    }

    #[test]
    fn numeric_keys_load_as_string_ids() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "numbered.yml",
            "1001:\n  name: Knight Set\n  attributes:\n    \"2\": [\"x\"]\n",
        );

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert_eq!(ids(&outcome), vec!["1001"]);
        assert_eq!(outcome.registry.get("1001").unwrap().name(), "Knight Set");
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn non_scalar_key_is_reported_by_its_text() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "sets.yml",
            "? [a, b]\n: {}\ngood:\n  name: Good Set\n  attributes:\n    2: [\"x\"]\n",
        );

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert_eq!(ids(&outcome), vec!["good"]);
        assert_eq!(outcome.skipped.len(), 1);
        let entry = &outcome.skipped[0];
        assert!(matches!(entry.reason, EntryError::NonScalarKey(_)));
        let key = entry.set.as_ref().unwrap().as_str();
        assert!(key.contains('a') && key.contains('b'), "{key}");
    }

    #[test]
    fn malformed_file_is_skipped_whole() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.yml", "a: [unclosed");
        write(dir.path(), "b.yml", "ok:\n  attributes:\n    2: [\"x\"]\n");
        write(dir.path(), "c.yml", "- just\n- a list\n");

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert_eq!(outcome.files, 3);
        assert_eq!(ids(&outcome), vec!["ok"]);
        assert_eq!(outcome.skipped.len(), 2);
        assert!(matches!(outcome.skipped[0].reason, EntryError::Parse(_)));
        assert!(matches!(outcome.skipped[1].reason, EntryError::NotAMapping));
        assert!(outcome.skipped.iter().all(|entry| entry.set.is_none()));
    }

    #[test]
    fn files_load_in_name_order_and_later_duplicates_replace() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.yaml", "beta:\n  name: Beta\nalpha:\n  name: Alpha Two\n");
        write(dir.path(), "a.yml", "alpha:\n  name: Alpha One\n");
        write(dir.path(), "notes.txt", "ignored: true\n");
        write(dir.path(), "empty.yml", "");

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert_eq!(outcome.files, 3);
        assert_eq!(ids(&outcome), vec!["alpha", "beta"]);
        assert_eq!(outcome.registry.get("alpha").unwrap().name(), "Alpha Two");
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn ambiguous_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "sets.yml",
            "dragon:\n  name: Dragon Set\nelder:\n  name: Elder Dragon Set\n",
        );

        let outcome = SetLoader::new(dir.path()).load().unwrap();

        assert_eq!(ids(&outcome), vec!["dragon"]);
        assert!(matches!(outcome.skipped[0].reason, EntryError::Registry(_)));
    }

    #[test]
    fn reload_drops_removed_sets() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "sets.yml", "one:\n  name: One\ntwo:\n  name: Two\n");
        let loader = SetLoader::new(dir.path());
        assert_eq!(ids(&loader.load().unwrap()), vec!["one", "two"]);

        write(dir.path(), "sets.yml", "two:\n  name: Two\n");
        assert_eq!(ids(&loader.load().unwrap()), vec!["two"]);
    }
}
