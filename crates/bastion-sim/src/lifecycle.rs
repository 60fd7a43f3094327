//! Active-agent bookkeeping and terminal-state arbitration.

use std::collections::BTreeSet;

use log::{debug, info};

use bastion_core::enums::Outcome;
use bastion_core::types::AgentId;

/// Singleton encounter progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncounterSession {
    /// 1-based index of the latest started wave; 0 before the first.
    pub current_wave_index: u32,
    pub wave_in_progress: bool,
    pub active_agents: BTreeSet<AgentId>,
    pub terminal: Option<Outcome>,
}

/// Result of reporting an agent removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The id was not active (already removed, or never admitted).
    Ignored,
    Removed { remaining: usize },
    /// The last agent of the running wave is gone.
    WaveCleared { index: u32 },
}

/// What follows a cleared wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveResolution {
    NextWave,
    Won,
}

/// Owns `EncounterSession` membership and decides Won / Lost.
#[derive(Debug, Default)]
pub struct LifecycleCoordinator {
    session: EncounterSession,
}

impl LifecycleCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &EncounterSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut EncounterSession {
        &mut self.session
    }

    /// Admit a successfully created agent into the running wave.
    pub fn admit(&mut self, id: AgentId) {
        self.session.active_agents.insert(id);
    }

    /// Report that an agent reached `Removed`. Safe to call more than once
    /// for the same id: later calls are ignored.
    pub fn on_agent_removed(&mut self, id: AgentId) -> RemovalOutcome {
        if !self.session.active_agents.remove(&id) {
            debug!("ignoring removal of inactive {id}");
            return RemovalOutcome::Ignored;
        }
        let remaining = self.session.active_agents.len();
        if remaining > 0 || !self.session.wave_in_progress {
            return RemovalOutcome::Removed { remaining };
        }
        self.session.wave_in_progress = false;
        RemovalOutcome::WaveCleared {
            index: self.session.current_wave_index,
        }
    }

    /// Decide what follows a cleared wave, declaring `Won` after the last one.
    pub fn resolve_cleared_wave(&mut self, total_waves: u32) -> WaveResolution {
        if self.session.current_wave_index >= total_waves && self.session.active_agents.is_empty()
        {
            self.declare(Outcome::Won);
            WaveResolution::Won
        } else {
            WaveResolution::NextWave
        }
    }

    /// Record a terminal outcome. Only the first declaration counts.
    pub fn declare(&mut self, outcome: Outcome) -> bool {
        if self.session.terminal.is_some() {
            return false;
        }
        info!("encounter ended: {outcome:?}");
        self.session.terminal = Some(outcome);
        true
    }
}
