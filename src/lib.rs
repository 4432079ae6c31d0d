//! Awaken Sim - Monte Carlo cost estimator for awakened enhancement
//!
//! This module exposes the simulation core for testing and external use.

pub mod build_info;
pub mod enhancement;
pub mod error;
pub mod simulator;
pub mod statistics;

pub use error::{Result, SimError};
