//! Narrow interfaces to the presentation and audio layers.

use bastion_core::enums::Difficulty;
use bastion_core::error::PresentationError;
use bastion_core::events::CueId;
use bastion_core::types::{AgentId, Position};

/// Everything presentation needs to build a representation for a new agent.
#[derive(Debug, Clone, Copy)]
pub struct AgentSpawn {
    pub id: AgentId,
    pub wave_index: u32,
    pub position: Position,
    pub orientation: f64,
    pub flavor: Difficulty,
}

/// Presentation hook called once per spawned agent.
///
/// A failure skips that single agent: it never joins the wave.
pub trait AgentPresenter {
    fn create_agent(&mut self, spawn: &AgentSpawn) -> Result<(), PresentationError>;
}

/// Fire-and-forget sound output.
pub trait AudioSink {
    fn play_cue(&mut self, cue: CueId, volume: f64);
}

/// Collaborator for headless runs: accepts every agent, plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl AgentPresenter for Headless {
    fn create_agent(&mut self, _spawn: &AgentSpawn) -> Result<(), PresentationError> {
        Ok(())
    }
}

impl AudioSink for Headless {
    fn play_cue(&mut self, _cue: CueId, _volume: f64) {}
}

/// External collaborators owned by the engine.
pub struct Collaborators {
    pub presenter: Box<dyn AgentPresenter>,
    pub audio: Box<dyn AudioSink>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            presenter: Box::new(Headless),
            audio: Box::new(Headless),
        }
    }
}
