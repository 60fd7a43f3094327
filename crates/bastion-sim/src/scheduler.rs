//! Wave progression state machine: `Idle -> Spawning -> InProgress -> (Idle | Won | Lost)`.

use log::{info, warn};

use bastion_core::enums::Outcome;
use bastion_core::error::SchedulerError;

use crate::lifecycle::{LifecycleCoordinator, RemovalOutcome, WaveResolution};
use crate::systems::wave_spawner::{self, SpawnContext, WaveReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchedulerPhase {
    #[default]
    Idle,
    Spawning,
    InProgress,
    Won,
    Lost,
}

/// What the engine must do after a wave-level event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Nothing,
    /// Queue the next wave after the inter-wave delay.
    ScheduleNextWave,
    /// The encounter reached a terminal outcome.
    Ended(Outcome),
}

#[derive(Debug)]
pub struct WaveScheduler {
    phase: SchedulerPhase,
    total_waves: u32,
}

impl WaveScheduler {
    pub fn new(total_waves: u32) -> Self {
        Self {
            phase: SchedulerPhase::Idle,
            total_waves,
        }
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    pub fn total_waves(&self) -> u32 {
        self.total_waves
    }

    /// Check the start preconditions without changing anything.
    pub fn can_start(&self, lifecycle: &LifecycleCoordinator) -> Result<u32, SchedulerError> {
        let session = lifecycle.session();
        if session.terminal.is_some() {
            return Err(SchedulerError::EncounterEnded);
        }
        if session.wave_in_progress {
            return Err(SchedulerError::WaveInProgress(session.current_wave_index));
        }
        if session.current_wave_index >= self.total_waves {
            return Err(SchedulerError::NoWavesLeft(self.total_waves));
        }
        Ok(session.current_wave_index + 1)
    }

    /// Start the next wave and spawn its agents one by one.
    ///
    /// Agents the presenter refuses are skipped, not rolled back, so a wave
    /// may run with fewer agents than its definition asks for.
    pub fn start_next_wave(
        &mut self,
        lifecycle: &mut LifecycleCoordinator,
        ctx: SpawnContext,
    ) -> Result<(WaveReport, SchedulerAction), SchedulerError> {
        let index = self.can_start(lifecycle)?;
        let Some(definition) = ctx.config.wave(index).cloned() else {
            return Err(SchedulerError::NoWavesLeft(self.total_waves));
        };

        self.phase = SchedulerPhase::Spawning;
        {
            let session = lifecycle.session_mut();
            session.wave_in_progress = true;
            session.current_wave_index = index;
        }

        let report = wave_spawner::spawn_wave(&definition, lifecycle, ctx);
        self.phase = SchedulerPhase::InProgress;
        info!(
            "wave {index}/{} started: {} agents ({} skipped)",
            self.total_waves, report.spawned, report.skipped
        );

        // Every agent failed creation: the wave is over before it began.
        let action = if report.spawned == 0 {
            warn!("wave {index} spawned no agents");
            lifecycle.session_mut().wave_in_progress = false;
            self.on_wave_cleared(lifecycle)
        } else {
            SchedulerAction::Nothing
        };
        Ok((report, action))
    }

    /// Forward a removal to the lifecycle coordinator and react to a cleared wave.
    pub fn on_agent_removed(
        &mut self,
        lifecycle: &mut LifecycleCoordinator,
        outcome: RemovalOutcome,
    ) -> SchedulerAction {
        match outcome {
            RemovalOutcome::WaveCleared { .. } => self.on_wave_cleared(lifecycle),
            RemovalOutcome::Ignored | RemovalOutcome::Removed { .. } => SchedulerAction::Nothing,
        }
    }

    fn on_wave_cleared(&mut self, lifecycle: &mut LifecycleCoordinator) -> SchedulerAction {
        match lifecycle.resolve_cleared_wave(self.total_waves) {
            WaveResolution::Won => {
                self.phase = SchedulerPhase::Won;
                SchedulerAction::Ended(Outcome::Won)
            }
            WaveResolution::NextWave => {
                self.phase = SchedulerPhase::Idle;
                SchedulerAction::ScheduleNextWave
            }
        }
    }

    /// Structure destroyed: `Lost` wins over every other transition.
    pub fn on_structure_destroyed(&mut self, lifecycle: &mut LifecycleCoordinator) -> bool {
        self.phase = SchedulerPhase::Lost;
        lifecycle.declare(Outcome::Lost)
    }
}
