//! Entity spawn factories for agents.

use hecs::World;

use bastion_agent_ai::profiles::AgentStats;
use bastion_core::components::*;
use bastion_core::enums::{AgentState, Difficulty};
use bastion_core::types::{AgentId, Position};

/// Spawn one agent entity in the `Approaching` state.
#[allow(clippy::too_many_arguments)]
pub fn spawn_agent(
    world: &mut World,
    id: AgentId,
    wave_index: u32,
    flavor: Difficulty,
    position: Position,
    orientation: f64,
    stats: &AgentStats,
    first_cue_in_secs: f64,
) -> hecs::Entity {
    let combat = AgentCombat {
        state: AgentState::Approaching,
        cooldown_remaining: 0.0,
        cooldown_period: stats.cooldown_period,
        attack_damage: stats.attack_damage,
        attack_range: stats.attack_range,
        move_speed: stats.move_speed,
        defense: stats.defense,
    };

    world.spawn((
        Agent {
            id,
            wave_index,
            flavor,
        },
        position,
        Orientation(orientation),
        Health::full(stats.max_health),
        combat,
        Vocalizer {
            next_cue_in_secs: first_cue_in_secs,
        },
    ))
}
