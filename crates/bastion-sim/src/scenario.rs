//! Scenario definitions: hardcoded encounter presets.
//!
//! Each scenario defines the wave table, difficulty and pacing. Everything
//! else falls back to `EncounterConfig::default()`.

use bastion_core::config::{EncounterConfig, WaveDefinition};
use bastion_core::enums::{Difficulty, ScenarioId};

/// Build the encounter config for a given scenario.
pub fn build_config(scenario: ScenarioId) -> EncounterConfig {
    match scenario {
        ScenarioId::Skirmish => build_skirmish(),
        ScenarioId::Siege => build_siege(),
        ScenarioId::Onslaught => build_onslaught(),
    }
}

/// Skirmish: 3 waves, 18 agents, Veteran.
fn build_skirmish() -> EncounterConfig {
    EncounterConfig::default()
}

/// Siege: 5 waves, 40 agents, Veteran, short breathers.
fn build_siege() -> EncounterConfig {
    EncounterConfig {
        waves: vec![
            WaveDefinition::new(1, 4, 60.0, 8.0),
            WaveDefinition::new(2, 6, 80.0, 10.0),
            WaveDefinition::new(3, 8, 100.0, 12.0),
            WaveDefinition::new(4, 10, 120.0, 14.0),
            WaveDefinition::new(5, 12, 150.0, 16.0),
        ],
        difficulty: Difficulty::Veteran,
        inter_wave_delay_secs: 3.0,
        ..Default::default()
    }
}

/// Onslaught: 7 waves, 84 agents, Elite, no breather before the first wave
/// and barely any between.
fn build_onslaught() -> EncounterConfig {
    let waves = (1..=7)
        .map(|index| {
            let step = (index - 1) as f64;
            WaveDefinition::new(index, 6 + 2 * index, 80.0 + 20.0 * step, 10.0 + 2.0 * step)
        })
        .collect();

    EncounterConfig {
        waves,
        difficulty: Difficulty::Elite,
        first_wave_delay_secs: 0.0,
        inter_wave_delay_secs: 1.5,
        death_grace_secs: 1.0,
        ..Default::default()
    }
}
