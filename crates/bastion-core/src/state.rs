//! Encounter snapshot: the complete read-only state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentState, GamePhase, Outcome};
use crate::events::EncounterEvent;
use crate::types::{AgentId, Position, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub terminal: Option<Outcome>,
    pub wave: WaveView,
    pub structure: StructureView,
    /// Live and dying agents, sorted by id.
    pub agents: Vec<AgentView>,
    /// Notifications raised since the previous snapshot.
    pub events: Vec<EncounterEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// 1-based index of the latest started wave (0 before the first).
    pub current_index: u32,
    pub total_waves: u32,
    pub in_progress: bool,
    pub active_agents: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureView {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Position,
    /// Radians, 0 = North, clockwise.
    pub orientation: f64,
    pub state: AgentState,
    pub health: f64,
    pub max_health: f64,
}
