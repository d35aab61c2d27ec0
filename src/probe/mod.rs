// src/probe/mod.rs
mod outcome;
mod prober;

pub use outcome::ProbeOutcome;
pub use prober::{HealthProber, ProbeError};
