//! Agent AI for BASTION.
//!
//! Implements the per-agent combat state machine, footprint geometry,
//! difficulty profiles and the proximity vocalization curve.

pub mod footprint;
pub mod fsm;
pub mod profiles;
pub mod vocal;

pub use bastion_core as core;

#[cfg(test)]
mod tests;
