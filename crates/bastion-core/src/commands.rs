//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::AgentId;

/// All actions the hosting application can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Begin the encounter; the first wave is scheduled on the logical clock.
    StartEncounter,
    /// Freeze the logical clock, cooldowns and every pending transition.
    Pause,
    Resume,
    /// Multiplier on the delta time of every update (0.0 freezes, clamped to 4.0).
    SetTimeScale { scale: f64 },
    /// Deal damage to an agent (mitigated by its defense).
    DamageAgent { agent_id: AgentId, amount: f64 },
    /// Drop an agent's health to zero regardless of defense.
    KillAgent { agent_id: AgentId },
    /// Discard the current session and return to `Idle` with a fresh structure.
    RestartEncounter,
}
