//! Events emitted by the simulation for the host and the audio collaborator.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, Outcome};
use crate::types::{AgentId, Position};

/// Identifier of a sound cue played through the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CueId {
    /// Proximity growl of an approaching agent.
    Vocalization,
    /// A strike landed on the structure.
    StructureHit,
    AgentDeath,
}

/// Outcome notifications collected during a tick and delivered in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterEvent {
    WaveStarted {
        index: u32,
        spawned: u32,
        skipped: u32,
    },
    AgentSpawned {
        agent_id: AgentId,
        position: Position,
    },
    /// The presenter refused the agent; it never joined the wave.
    AgentSpawnSkipped {
        wave_index: u32,
        reason: String,
    },
    /// Presentation keys animations off these.
    AgentStateChanged {
        agent_id: AgentId,
        from: AgentState,
        to: AgentState,
    },
    StructureDamaged {
        agent_id: AgentId,
        amount: f64,
        remaining: f64,
    },
    AgentDied {
        agent_id: AgentId,
    },
    AgentRemoved {
        agent_id: AgentId,
    },
    WaveComplete {
        index: u32,
    },
    EncounterEnded {
        outcome: Outcome,
    },
}
