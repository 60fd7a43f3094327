//! ECS systems that operate on the encounter world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the engine state they need passed in explicitly.

pub mod agent_behavior;
pub mod snapshot;
pub mod vocalization;
pub mod wave_spawner;
