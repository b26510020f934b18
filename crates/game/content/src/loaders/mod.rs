//! Content loaders for reading set definitions from files.
//!
//! [`SetLoader`] reads a directory of YAML files; [`format`] holds the on-disk
//! format and its conversion into [`armorset_core::SetDefinition`].

pub mod sets;
pub mod format;

pub use sets::{EXAMPLE_SET_FILE, LoadOutcome, SetLoader, SkippedEntry};

use std::io;
use std::path::{Path, PathBuf};

use armorset_core::{DefinitionError, RegistryError, SetId};

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// Failure that aborts a whole load.
///
/// Only directory-level I/O is fatal. Problems inside a file or entry are
/// reported as [`EntryError`]s and skipped.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to create set directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to seed example set file {}", path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list set directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a file or a single set entry was skipped.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("failed to read file")]
    Read(#[source] io::Error),

    #[error("invalid YAML")]
    Parse(#[source] serde_yaml::Error),

    #[error("top-level document is not a mapping of set ids")]
    NotAMapping,

    #[error("set key `{0}` is not a string or number")]
    NonScalarKey(String),

    #[error("set `{0}` has no configuration section")]
    MissingSection(SetId),

    #[error("set `{set}` is malformed")]
    Malformed {
        set: SetId,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> Result<String, EntryError> {
    std::fs::read_to_string(path).map_err(EntryError::Read)
}
