//! Proximity vocalization: approaching agents growl at randomized intervals.
//!
//! Purely cosmetic. Never touches agent state.

use std::collections::BTreeMap;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_agent_ai::vocal::cue_volume;
use bastion_core::components::{AgentCombat, Structure, Vocalizer};
use bastion_core::config::VocalizationConfig;
use bastion_core::enums::AgentState;
use bastion_core::events::CueId;
use bastion_core::types::{AgentId, Position};

use crate::collaborators::AudioSink;

pub fn run(
    world: &mut World,
    roster: &BTreeMap<AgentId, hecs::Entity>,
    structure: &Structure,
    config: &VocalizationConfig,
    dt: f64,
    rng: &mut ChaCha8Rng,
    audio: &mut dyn AudioSink,
) {
    for &entity in roster.values() {
        let Ok((position, combat, vocalizer)) =
            world.query_one_mut::<(&Position, &AgentCombat, &mut Vocalizer)>(entity)
        else {
            continue;
        };
        if combat.state != AgentState::Approaching {
            continue;
        }

        vocalizer.next_cue_in_secs -= dt;
        if vocalizer.next_cue_in_secs > 0.0 {
            continue;
        }
        vocalizer.next_cue_in_secs =
            rng.gen_range(config.min_interval_secs..=config.max_interval_secs);

        if let Some(volume) = cue_volume(position.distance(structure.position), config) {
            audio.play_cue(CueId::Vocalization, volume);
        }
    }
}
