//! Agent behavior system: evaluates the FSM of every live agent in id order.
//!
//! Strikes are applied to the structure as soon as each agent is evaluated, so
//! the agent whose strike destroys the structure ends the pass.

use std::collections::BTreeMap;

use hecs::World;
use log::{debug, error};

use bastion_agent_ai::fsm::{evaluate, AgentContext};
use bastion_core::components::{AgentCombat, Health, Orientation, Structure};
use bastion_core::constants::WORLD_RADIUS;
use bastion_core::enums::AgentState;
use bastion_core::events::{CueId, EncounterEvent};
use bastion_core::types::{AgentId, Position};

use crate::collaborators::AudioSink;
use crate::combat;

/// What the pass produced that the engine must act on.
#[derive(Debug, Default)]
pub struct BehaviorOutcome {
    /// Agents that entered `Dying` this tick.
    pub died: Vec<AgentId>,
    /// Agent whose strike brought the structure to zero.
    pub destroyed_by: Option<AgentId>,
}

pub fn run(
    world: &mut World,
    roster: &BTreeMap<AgentId, hecs::Entity>,
    structure: &mut Structure,
    dt: f64,
    events: &mut Vec<EncounterEvent>,
    audio: &mut dyn AudioSink,
) -> BehaviorOutcome {
    let mut outcome = BehaviorOutcome::default();

    for (&id, &entity) in roster {
        let Ok((position, orientation, health, combat_state)) = world
            .query_one_mut::<(&mut Position, &mut Orientation, &Health, &mut AgentCombat)>(entity)
        else {
            continue;
        };
        if !combat_state.state.is_live() {
            continue;
        }

        let update = {
            let ctx = AgentContext {
                state: combat_state.state,
                position: *position,
                orientation: orientation.0,
                health: health.current,
                cooldown_remaining: combat_state.cooldown_remaining,
                cooldown_period: combat_state.cooldown_period,
                attack_damage: combat_state.attack_damage,
                attack_range: combat_state.attack_range,
                move_speed: combat_state.move_speed,
                dt,
                structure: &*structure,
                nearest: &*structure,
            };
            evaluate(&ctx)
        };

        *position = clamp_to_world(update.position, structure.position);
        orientation.0 = update.orientation;
        combat_state.cooldown_remaining = update.cooldown_remaining;

        let mut rejected = false;
        for &next in &update.entered {
            match combat_state.state.transition(next) {
                Ok(to) => {
                    events.push(EncounterEvent::AgentStateChanged {
                        agent_id: id,
                        from: combat_state.state,
                        to,
                    });
                    combat_state.state = to;
                }
                Err(err) => {
                    error!("{id}: {err}");
                    rejected = true;
                    break;
                }
            }
        }
        if rejected {
            continue;
        }

        if combat_state.state == AgentState::Dying {
            debug!("{id} is dying");
            events.push(EncounterEvent::AgentDied { agent_id: id });
            audio.play_cue(CueId::AgentDeath, 1.0);
            outcome.died.push(id);
            continue;
        }

        if let Some(amount) = update.strike {
            let result = combat::apply_damage(structure, amount);
            if result.actual > 0.0 {
                events.push(EncounterEvent::StructureDamaged {
                    agent_id: id,
                    amount: result.actual,
                    remaining: structure.health.current,
                });
                audio.play_cue(CueId::StructureHit, 1.0);
            }
            if result.destroyed {
                outcome.destroyed_by = Some(id);
                break;
            }
        }
    }

    outcome
}

/// Keep agents inside the playable radius around the structure.
fn clamp_to_world(position: Position, center: Position) -> Position {
    let offset = position - center;
    if offset.length() > WORLD_RADIUS {
        center + offset.normalize() * WORLD_RADIUS
    } else {
        position
    }
}
