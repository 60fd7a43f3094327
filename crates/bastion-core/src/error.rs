//! Error types surfaced by the core.

use thiserror::Error;

use crate::enums::AgentState;

/// Invalid encounter configuration. Fatal at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("wave table is empty")]
    EmptyWaveTable,
    #[error("wave at position {position} has index {found}, expected {expected}")]
    WaveIndexOutOfOrder {
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("wave {index} has no agents")]
    EmptyWave { index: u32 },
    #[error("wave {index} has invalid agent health {value}")]
    InvalidAgentHealth { index: u32, value: f64 },
    #[error("wave {index} has invalid agent damage {value}")]
    InvalidAgentDamage { index: u32, value: f64 },
    #[error("spawn ring radius must be positive, got {0}")]
    InvalidSpawnRadius(f64),
    #[error("spawn ring needs at least one point")]
    NoSpawnPoints,
    #[error("{name} must be a finite positive value, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be a finite non-negative value, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("vocalization interval [{min}, {max}] is not a valid range")]
    InvalidVocalInterval { min: f64, max: f64 },
    #[error("minimum vocalization volume {0} is outside [0, 1]")]
    InvalidMinVolume(f64),
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Attempted agent state change outside the behavior graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid agent transition {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: AgentState,
    pub to: AgentState,
}

/// Rejected request to start the next wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("encounter already ended")]
    EncounterEnded,
    #[error("wave {0} is still in progress")]
    WaveInProgress(u32),
    #[error("all {0} waves have been started")]
    NoWavesLeft(u32),
}

/// The presenter could not produce a usable representation for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no representation for spawned agent: {reason}")]
pub struct PresentationError {
    pub reason: String,
}

impl PresentationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
