//! Public types shared across the runtime.
mod errors;
mod player;

pub use errors::{Result, RuntimeError};
pub use player::PlayerId;
