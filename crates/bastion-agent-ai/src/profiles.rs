//! Difficulty-specific agent profiles.
//!
//! Health and damage come from the wave table; speed and defense come from
//! the difficulty flavor and grow linearly with the wave index.

use bastion_core::config::{CombatTuning, WaveDefinition};
use bastion_core::enums::Difficulty;

/// Behavioral profile for a difficulty flavor.
pub struct AgentProfile {
    /// Multiplier on the configured base move speed.
    pub speed_factor: f64,
    /// Fractional speed gain per wave after the first.
    pub speed_growth_per_wave: f64,
    /// Flat damage mitigation on wave 1.
    pub base_defense: f64,
    /// Mitigation gained per wave after the first.
    pub defense_per_wave: f64,
}

/// Get the profile for a given difficulty.
pub fn get_profile(difficulty: Difficulty) -> AgentProfile {
    match difficulty {
        Difficulty::Recruit => AgentProfile {
            speed_factor: 0.85,
            speed_growth_per_wave: 0.03,
            base_defense: 0.0,
            defense_per_wave: 0.5,
        },
        Difficulty::Veteran => AgentProfile {
            speed_factor: 1.0,
            speed_growth_per_wave: 0.05,
            base_defense: 1.0,
            defense_per_wave: 1.0,
        },
        Difficulty::Elite => AgentProfile {
            speed_factor: 1.2,
            speed_growth_per_wave: 0.08,
            base_defense: 2.0,
            defense_per_wave: 1.5,
        },
    }
}

/// Fully resolved stats for one spawned agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentStats {
    pub max_health: f64,
    pub attack_damage: f64,
    pub attack_range: f64,
    pub cooldown_period: f64,
    pub move_speed: f64,
    pub defense: f64,
}

/// Resolve the stats of an agent spawned by `wave` under `difficulty`.
pub fn scaled_stats(
    difficulty: Difficulty,
    wave: &WaveDefinition,
    tuning: &CombatTuning,
) -> AgentStats {
    let profile = get_profile(difficulty);
    let steps = wave.index.saturating_sub(1) as f64;

    AgentStats {
        max_health: wave.agent_health,
        attack_damage: wave.agent_damage,
        attack_range: tuning.attack_range,
        cooldown_period: tuning.attack_cooldown_secs,
        move_speed: tuning.move_speed
            * profile.speed_factor
            * (1.0 + profile.speed_growth_per_wave * steps),
        defense: profile.base_defense + profile.defense_per_wave * steps,
    }
}
