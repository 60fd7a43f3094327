//! Encounter engine: the core of the simulation.
//!
//! `EncounterEngine` owns the hecs world, the structure, the session and every
//! timer. One `update(dt)` call drains host commands, advances the logical
//! clock, fires due deferred transitions and evaluates every live agent.
//! Completely headless, enabling deterministic testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::HostCommand;
use bastion_core::components::{AgentCombat, Health, Structure};
use bastion_core::config::{EncounterConfig, ValidatedConfig};
use bastion_core::constants::{DT, MAX_TIME_SCALE};
use bastion_core::enums::{AgentState, GamePhase, Outcome};
use bastion_core::error::{ConfigError, SchedulerError};
use bastion_core::events::EncounterEvent;
use bastion_core::state::EncounterSnapshot;
use bastion_core::types::{AgentId, SimTime};

use crate::collaborators::{AgentPresenter, AudioSink, Collaborators};
use crate::combat;
use crate::deferred::{DeferredAction, DeferredQueue};
use crate::lifecycle::{EncounterSession, LifecycleCoordinator};
use crate::scheduler::{SchedulerAction, SchedulerPhase, WaveScheduler};
use crate::spawn_points::SpawnPointAllocator;
use crate::systems;
use crate::systems::wave_spawner::SpawnContext;

/// The encounter engine. Owns the ECS world and all encounter state.
pub struct EncounterEngine {
    config: ValidatedConfig,
    world: World,
    structure: Structure,
    lifecycle: LifecycleCoordinator,
    scheduler: WaveScheduler,
    deferred: DeferredQueue,
    spawn_points: SpawnPointAllocator,
    /// Live and dying agents by id; iteration order is the tick order.
    roster: BTreeMap<AgentId, hecs::Entity>,
    rng: ChaCha8Rng,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    next_agent_id: u32,
    command_queue: VecDeque<HostCommand>,
    events: Vec<EncounterEvent>,
    presenter: Box<dyn AgentPresenter>,
    audio: Box<dyn AudioSink>,
}

impl EncounterEngine {
    /// Validate `config` and build an idle engine with headless collaborators.
    pub fn new(config: EncounterConfig) -> Result<Self, ConfigError> {
        Self::with_collaborators(config, Collaborators::default())
    }

    pub fn with_collaborators(
        config: EncounterConfig,
        collaborators: Collaborators,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let structure_cfg = &config.structure;
        let structure = Structure::new(
            structure_cfg.position,
            structure_cfg.max_health,
            structure_cfg.footprint,
        );
        let spawn_points = SpawnPointAllocator::generate(
            structure.position,
            config.spawn_ring.radius,
            config.spawn_ring.point_count,
        );

        Ok(Self {
            world: World::new(),
            structure,
            lifecycle: LifecycleCoordinator::new(),
            scheduler: WaveScheduler::new(config.wave_count()),
            deferred: DeferredQueue::new(),
            spawn_points,
            roster: BTreeMap::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            phase: GamePhase::Idle,
            time_scale: 1.0,
            next_agent_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            presenter: collaborators.presenter,
            audio: collaborators.audio,
            config,
        })
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one fixed tick (`DT`).
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.update(DT)
    }

    /// Advance the encounter by `delta_secs` of external clock time and
    /// return the resulting snapshot. Nothing advances unless `Active`.
    pub fn update(&mut self, delta_secs: f64) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = if delta_secs.is_finite() && delta_secs > 0.0 {
                delta_secs * self.time_scale
            } else {
                0.0
            };
            self.time.advance(dt);
            self.run_systems(dt);
        }

        self.snapshot()
    }

    /// Build a snapshot, draining events raised since the last one.
    pub fn snapshot(&mut self) -> EncounterSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.lifecycle.session(),
            self.scheduler.total_waves(),
            &self.structure,
            events,
        )
    }

    /// Start the next wave now. Fails when a wave is running, the encounter
    /// has ended, or every wave has been started.
    pub fn start_next_wave(&mut self) -> Result<u32, SchedulerError> {
        let ctx = SpawnContext {
            world: &mut self.world,
            rng: &mut self.rng,
            spawn_points: &self.spawn_points,
            presenter: self.presenter.as_mut(),
            config: &self.config,
            structure: &self.structure,
            roster: &mut self.roster,
            next_agent_id: &mut self.next_agent_id,
            events: &mut self.events,
        };
        let (report, action) = self.scheduler.start_next_wave(&mut self.lifecycle, ctx)?;
        // A host-started wave supersedes any start still waiting on the clock.
        let stale = self.deferred.cancel(DeferredAction::StartNextWave);
        if stale > 0 {
            debug!("wave {} started early, {stale} pending start(s) dropped", report.index);
        }
        if action != SchedulerAction::Nothing {
            self.events
                .push(EncounterEvent::WaveComplete { index: report.index });
        }
        self.apply_scheduler_action(action);
        Ok(report.index)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn session(&self) -> &EncounterSession {
        self.lifecycle.session()
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn scheduler_phase(&self) -> SchedulerPhase {
        self.scheduler.phase()
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    pub fn spawn_points(&self) -> &SpawnPointAllocator {
        &self.spawn_points
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of deferred transitions waiting on the logical clock.
    pub fn pending_transitions(&self) -> usize {
        self.deferred.len()
    }

    /// State of an agent still in the world (`None` once removed).
    pub fn agent_state(&self, id: AgentId) -> Option<AgentState> {
        let entity = *self.roster.get(&id)?;
        self.world
            .get::<&AgentCombat>(entity)
            .ok()
            .map(|combat| combat.state)
    }

    /// Ids of agents still in the world, ascending.
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.roster.keys().copied().collect()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartEncounter => {
                if self.phase == GamePhase::Idle {
                    self.phase = GamePhase::Active;
                    let fire_at = self.time.elapsed_secs + self.config.first_wave_delay_secs;
                    self.deferred.schedule(fire_at, DeferredAction::StartNextWave);
                    info!(
                        "encounter started: {} waves, seed {}",
                        self.scheduler.total_waves(),
                        self.config.seed
                    );
                } else {
                    warn!("StartEncounter ignored in phase {:?}", self.phase);
                }
            }
            HostCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            HostCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            HostCommand::SetTimeScale { scale } => {
                if scale.is_nan() {
                    warn!("SetTimeScale ignored: scale is NaN");
                } else {
                    self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                }
            }
            HostCommand::DamageAgent { agent_id, amount } => {
                self.damage_agent(agent_id, amount);
            }
            HostCommand::KillAgent { agent_id } => self.kill_agent(agent_id),
            HostCommand::RestartEncounter => self.restart(),
        }
    }

    /// Run one tick of systems. `Lost` pre-empts everything after the strike
    /// that caused it.
    fn run_systems(&mut self, dt: f64) {
        // 1. Deferred transitions due on the logical clock
        while let Some(action) = self.deferred.pop_due(self.time.elapsed_secs) {
            self.fire_deferred(action);
            if self.lifecycle.session().terminal.is_some() {
                return;
            }
        }

        // 2. Agent behavior and strikes
        let outcome = systems::agent_behavior::run(
            &mut self.world,
            &self.roster,
            &mut self.structure,
            dt,
            &mut self.events,
            self.audio.as_mut(),
        );
        if let Some(id) = outcome.destroyed_by {
            if self.scheduler.on_structure_destroyed(&mut self.lifecycle) {
                info!("structure destroyed by {id}");
            }
            self.end(Outcome::Lost);
            return;
        }

        // 3. Death grace periods
        let remove_at = self.time.elapsed_secs + self.config.death_grace_secs;
        for id in outcome.died {
            self.deferred
                .schedule(remove_at, DeferredAction::RemoveAgent(id));
        }

        // 4. Cosmetic audio
        systems::vocalization::run(
            &mut self.world,
            &self.roster,
            &self.structure,
            &self.config.vocalization,
            dt,
            &mut self.rng,
            self.audio.as_mut(),
        );
    }

    fn fire_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::StartNextWave => {
                if let Err(err) = self.start_next_wave() {
                    warn!("deferred wave start rejected: {err}");
                }
            }
            DeferredAction::RemoveAgent(id) => self.remove_agent(id),
        }
    }

    /// Dying -> Removed, then report to the lifecycle coordinator.
    fn remove_agent(&mut self, id: AgentId) {
        let Some(&entity) = self.roster.get(&id) else {
            error!("removal requested for unknown {id}");
            return;
        };
        {
            let Ok(mut combat) = self.world.get::<&mut AgentCombat>(entity) else {
                error!("{id} has no combat state");
                return;
            };
            match combat.state.transition(AgentState::Removed) {
                Ok(to) => {
                    self.events.push(EncounterEvent::AgentStateChanged {
                        agent_id: id,
                        from: combat.state,
                        to,
                    });
                    combat.state = to;
                }
                Err(err) => {
                    error!("{id}: {err}");
                    return;
                }
            }
        }

        self.roster.remove(&id);
        if let Err(err) = self.world.despawn(entity) {
            error!("{id} was in the roster but not the world: {err}");
        }
        self.events.push(EncounterEvent::AgentRemoved { agent_id: id });
        debug!("{id} removed");

        let removal = self.lifecycle.on_agent_removed(id);
        let action = self.scheduler.on_agent_removed(&mut self.lifecycle, removal);
        if action != SchedulerAction::Nothing {
            let index = self.lifecycle.session().current_wave_index;
            info!("wave {index} complete");
            self.events.push(EncounterEvent::WaveComplete { index });
        }
        self.apply_scheduler_action(action);
    }

    fn apply_scheduler_action(&mut self, action: SchedulerAction) {
        match action {
            SchedulerAction::Nothing => {}
            SchedulerAction::ScheduleNextWave => {
                let fire_at = self.time.elapsed_secs + self.config.inter_wave_delay_secs;
                self.deferred.schedule(fire_at, DeferredAction::StartNextWave);
            }
            SchedulerAction::Ended(outcome) => self.end(outcome),
        }
    }

    /// Enter the terminal phase: no more spawns, agent updates or timers.
    fn end(&mut self, outcome: Outcome) {
        self.lifecycle.declare(outcome);
        self.deferred.clear();
        self.phase = GamePhase::Ended;
        self.events.push(EncounterEvent::EncounterEnded { outcome });
    }

    /// Host damage to a live agent, mitigated by its defense.
    fn damage_agent(&mut self, id: AgentId, amount: f64) -> f64 {
        let Some(&entity) = self.roster.get(&id) else {
            debug!("damage for unknown {id} ignored");
            return 0.0;
        };
        let Ok((health, combat_state)) = self
            .world
            .query_one_mut::<(&mut Health, &AgentCombat)>(entity)
        else {
            return 0.0;
        };
        if !combat_state.state.is_live() {
            debug!("damage for non-live {id} ignored");
            return 0.0;
        }
        combat::damage_agent(health, combat_state.defense, amount)
    }

    /// Force an agent's health to zero. It enters `Dying` on its next evaluation.
    fn kill_agent(&mut self, id: AgentId) {
        let Some(&entity) = self.roster.get(&id) else {
            error!("kill requested for unknown {id}");
            return;
        };
        let Ok((health, combat_state)) = self
            .world
            .query_one_mut::<(&mut Health, &AgentCombat)>(entity)
        else {
            return;
        };
        if let Err(err) = combat_state.state.transition(AgentState::Dying) {
            error!("kill rejected for {id}: {err}");
            return;
        }
        health.current = 0.0;
    }

    /// Discard the session and return to `Idle` with a fresh structure.
    fn restart(&mut self) {
        info!("encounter restarted");
        self.world.clear();
        self.roster.clear();
        self.structure.health = Health::full(self.structure.health.max);
        self.lifecycle = LifecycleCoordinator::new();
        self.scheduler = WaveScheduler::new(self.config.wave_count());
        self.deferred.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
        self.phase = GamePhase::Idle;
        self.next_agent_id = 0;
        self.events.clear();
    }
}
