//! Simulation engine for BASTION.
//!
//! Owns the hecs ECS world, runs the encounter on a logical clock,
//! and produces EncounterSnapshots for the host.

pub mod collaborators;
pub mod combat;
pub mod deferred;
pub mod engine;
pub mod lifecycle;
pub mod scenario;
pub mod scheduler;
pub mod spawn_points;
pub mod systems;
pub mod world_setup;

pub use bastion_core as core;
pub use engine::EncounterEngine;
