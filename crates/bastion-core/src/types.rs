//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ground-plane position in simulation space (meters).
/// x = East, y = North.
pub type Position = DVec2;

/// Stable identifier of a spawned agent. Ids are never reused within an encounter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Ground footprint of the defended structure, centered on its position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Footprint {
    Circle { radius: f64 },
    Rect { half_extents: DVec2 },
}

impl Default for Footprint {
    fn default() -> Self {
        Footprint::Circle {
            radius: crate::constants::STRUCTURE_FOOTPRINT_RADIUS,
        }
    }
}

/// Simulation time tracking. Only advances while the encounter is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of updates applied.
    pub tick: u64,
    /// Elapsed simulated seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Bearing from `from` to `to` in radians (0 = North, clockwise).
pub fn bearing_to(from: Position, to: Position) -> f64 {
    let d = to - from;
    d.x.atan2(d.y).rem_euclid(std::f64::consts::TAU)
}
