//! Unified error types surfaced by the runtime API.
//!
//! Only service construction and reloads can fail. Resolution itself never
//! returns an error: lookup misses resolve to "no bonus".
use armorset_content::LoadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no attribute compiler configured, refusing to start")]
    MissingAttributeCompiler,

    #[error("service requires an equipment host to be configured before building")]
    MissingHost,

    #[error("no set directory configured, nothing to reload")]
    MissingLoader,

    #[error("failed to load set definitions")]
    Load(#[from] LoadError),
}
