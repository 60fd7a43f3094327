//! Wave spawning system: instantiates one wave's agents on the spawn ring.

use std::collections::BTreeMap;

use hecs::World;
use log::{debug, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_agent_ai::profiles::scaled_stats;
use bastion_core::components::Structure;
use bastion_core::config::{ValidatedConfig, WaveDefinition};
use bastion_core::events::EncounterEvent;
use bastion_core::types::{bearing_to, AgentId};

use crate::collaborators::{AgentPresenter, AgentSpawn};
use crate::lifecycle::LifecycleCoordinator;
use crate::spawn_points::SpawnPointAllocator;
use crate::world_setup;

/// Everything the spawner touches besides the session.
pub struct SpawnContext<'a> {
    pub world: &'a mut World,
    pub rng: &'a mut ChaCha8Rng,
    pub spawn_points: &'a SpawnPointAllocator,
    pub presenter: &'a mut dyn AgentPresenter,
    pub config: &'a ValidatedConfig,
    pub structure: &'a Structure,
    pub roster: &'a mut BTreeMap<AgentId, hecs::Entity>,
    pub next_agent_id: &'a mut u32,
    pub events: &'a mut Vec<EncounterEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveReport {
    pub index: u32,
    pub spawned: u32,
    pub skipped: u32,
}

/// Create `definition.agent_count` agents in sequence. Each is admitted into
/// the session only if the presenter accepts it.
pub fn spawn_wave(
    definition: &WaveDefinition,
    lifecycle: &mut LifecycleCoordinator,
    mut ctx: SpawnContext,
) -> WaveReport {
    let config = ctx.config;
    let stats = scaled_stats(config.difficulty, definition, &config.combat);
    let vocal = &config.vocalization;

    let mut report = WaveReport {
        index: definition.index,
        spawned: 0,
        skipped: 0,
    };

    for _ in 0..definition.agent_count {
        let id = AgentId(*ctx.next_agent_id);
        *ctx.next_agent_id += 1;

        let position = ctx.spawn_points.select(ctx.rng);
        let spawn = AgentSpawn {
            id,
            wave_index: definition.index,
            position,
            orientation: bearing_to(position, ctx.structure.position),
            flavor: config.difficulty,
        };

        if let Err(err) = ctx.presenter.create_agent(&spawn) {
            warn!("wave {}: skipping {id}: {err}", definition.index);
            report.skipped += 1;
            ctx.events.push(EncounterEvent::AgentSpawnSkipped {
                wave_index: definition.index,
                reason: err.reason,
            });
            continue;
        }

        let first_cue_in = ctx
            .rng
            .gen_range(vocal.min_interval_secs..=vocal.max_interval_secs);
        let entity = world_setup::spawn_agent(
            ctx.world,
            id,
            definition.index,
            config.difficulty,
            position,
            spawn.orientation,
            &stats,
            first_cue_in,
        );
        ctx.roster.insert(id, entity);
        lifecycle.admit(id);
        report.spawned += 1;

        debug!("spawned {id} at ({:.1}, {:.1})", position.x, position.y);
        ctx.events
            .push(EncounterEvent::AgentSpawned { agent_id: id, position });
    }

    ctx.events.push(EncounterEvent::WaveStarted {
        index: report.index,
        spawned: report.spawned,
        skipped: report.skipped,
    });
    report
}
