//! Proximity vocalization loudness.

use bastion_core::config::VocalizationConfig;

/// Volume of a cue emitted `distance` meters from the listener, or `None`
/// when the agent is out of earshot.
pub fn cue_volume(distance: f64, config: &VocalizationConfig) -> Option<f64> {
    if distance > config.max_audible_distance {
        return None;
    }
    let falloff = 1.0 - distance / config.max_audible_distance;
    Some(falloff.max(config.min_volume))
}
