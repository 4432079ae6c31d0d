//! Awakened enhancement: the fixed level schedule and the per-trial state
//! machine that climbs it.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
