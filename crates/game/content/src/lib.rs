//! Data-driven set definitions and their loader.
//!
//! Set definitions live as YAML files in a `sets/` directory. This crate turns
//! that directory into an [`armorset_core::SetRegistry`], isolating every
//! configuration error to the entry (or file) that caused it.
//!
//! Content is read once per load or reload and never mutated afterwards.

pub mod loaders;

pub use loaders::{
    EXAMPLE_SET_FILE, EntryError, LoadError, LoadOutcome, LoadResult, SetLoader, SkippedEntry,
};
