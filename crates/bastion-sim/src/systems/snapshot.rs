//! Snapshot system: builds the read-only `EncounterSnapshot` for presentation.
//!
//! This system never modifies the world.

use hecs::World;

use bastion_core::components::{Agent, AgentCombat, Health, Orientation, Structure};
use bastion_core::enums::GamePhase;
use bastion_core::events::EncounterEvent;
use bastion_core::state::*;
use bastion_core::types::{Position, SimTime};

use crate::lifecycle::EncounterSession;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &EncounterSession,
    total_waves: u32,
    structure: &Structure,
    events: Vec<EncounterEvent>,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        phase,
        terminal: session.terminal,
        wave: WaveView {
            current_index: session.current_wave_index,
            total_waves,
            in_progress: session.wave_in_progress,
            active_agents: session.active_agents.len() as u32,
        },
        structure: StructureView {
            position: structure.position,
            health: structure.health.current,
            max_health: structure.health.max,
        },
        agents: build_agents(world),
        events,
    }
}

fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Agent, &Position, &Orientation, &Health, &AgentCombat)>()
        .iter()
        .map(|(_, (agent, pos, orientation, health, combat))| AgentView {
            id: agent.id,
            position: *pos,
            orientation: orientation.0,
            state: combat.state,
            health: health.current,
            max_health: health.max,
        })
        .collect();

    agents.sort_by_key(|a| a.id);
    agents
}
