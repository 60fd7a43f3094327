//! ECS components for hecs entities, plus the defended structure.
//!
//! Components are plain data structs. Game logic lives in systems and the
//! agent FSM, not here.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, Difficulty};
use crate::types::{AgentId, Footprint, Position};

/// Current and maximum hit points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// Identity of an attacking agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// 1-based index of the wave that spawned it.
    pub wave_index: u32,
    pub flavor: Difficulty,
}

/// Facing of an agent (radians, 0 = North, clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub f64);

/// Combat state and stats of an attacking agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCombat {
    pub state: AgentState,
    /// Seconds until the next strike is allowed. Never negative.
    pub cooldown_remaining: f64,
    /// Cooldown applied after every strike.
    pub cooldown_period: f64,
    pub attack_damage: f64,
    pub attack_range: f64,
    pub move_speed: f64,
    /// Flat reduction applied to incoming damage.
    pub defense: f64,
}

/// Proximity vocalization timer. Cosmetic only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vocalizer {
    /// Seconds until the next cue attempt.
    pub next_cue_in_secs: f64,
}

/// The stationary defended structure. Exactly one per encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub position: Position,
    pub health: Health,
    pub footprint: Footprint,
}

impl Structure {
    pub fn new(position: Position, max_health: f64, footprint: Footprint) -> Self {
        Self {
            position,
            health: Health::full(max_health),
            footprint,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_depleted()
    }
}
