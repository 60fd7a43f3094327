//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::error::TransitionError;

/// Per-agent behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// Walking toward the nearest footprint point.
    #[default]
    Approaching,
    /// In range, ready to strike once the cooldown allows.
    Engaging,
    /// Waiting out the attack cooldown.
    Cooling,
    /// Health exhausted; waiting out the death grace period.
    Dying,
    /// Gone. Excluded from every later tick.
    Removed,
}

impl AgentState {
    /// States that still move and attack.
    pub fn is_live(self) -> bool {
        matches!(
            self,
            AgentState::Approaching | AgentState::Engaging | AgentState::Cooling
        )
    }

    /// Whether `self -> next` is an edge of the behavior graph.
    pub fn can_transition_to(self, next: AgentState) -> bool {
        use AgentState::*;
        matches!(
            (self, next),
            (Approaching, Engaging)
                | (Engaging, Cooling)
                | (Engaging, Approaching)
                | (Cooling, Engaging)
                | (Cooling, Approaching)
                | (Approaching | Engaging | Cooling, Dying)
                | (Dying, Removed)
        )
    }

    /// Checked transition. Rejects any edge outside the behavior graph.
    pub fn transition(self, next: AgentState) -> Result<AgentState, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError {
                from: self,
                to: next,
            })
        }
    }
}

/// Terminal outcome of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Top-level encounter phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Configured but not started.
    #[default]
    Idle,
    Active,
    Paused,
    /// A terminal outcome has been reached.
    Ended,
}

/// Difficulty flavor applied to every spawned agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Recruit,
    #[default]
    Veteran,
    Elite,
}

/// Built-in encounter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    Skirmish,
    Siege,
    Onslaught,
}
