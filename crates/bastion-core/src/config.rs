//! Encounter configuration, supplied once at construction.
//!
//! `EncounterConfig` is the loosely-checked form (serde, `Default`);
//! `ValidatedConfig` is the only form the simulation accepts.

use std::ops::Deref;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Difficulty;
use crate::error::ConfigError;
use crate::types::{Footprint, Position};

/// One row of the wave table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    /// 1-based, contiguous.
    pub index: u32,
    pub agent_count: u32,
    pub agent_health: f64,
    pub agent_damage: f64,
}

impl WaveDefinition {
    pub fn new(index: u32, agent_count: u32, agent_health: f64, agent_damage: f64) -> Self {
        Self {
            index,
            agent_count,
            agent_health,
            agent_damage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRingConfig {
    pub radius: f64,
    pub point_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatTuning {
    pub attack_range: f64,
    pub attack_cooldown_secs: f64,
    /// Base speed before difficulty scaling.
    pub move_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureConfig {
    pub position: Position,
    pub max_health: f64,
    pub footprint: Footprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocalizationConfig {
    pub min_interval_secs: f64,
    pub max_interval_secs: f64,
    pub min_volume: f64,
    pub max_audible_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// RNG seed. Same seed and same commands give the same encounter.
    pub seed: u64,
    pub waves: Vec<WaveDefinition>,
    pub difficulty: Difficulty,
    pub spawn_ring: SpawnRingConfig,
    pub combat: CombatTuning,
    pub structure: StructureConfig,
    pub first_wave_delay_secs: f64,
    pub inter_wave_delay_secs: f64,
    pub death_grace_secs: f64,
    pub vocalization: VocalizationConfig,
}

impl Default for SpawnRingConfig {
    fn default() -> Self {
        Self {
            radius: SPAWN_RING_RADIUS,
            point_count: SPAWN_POINT_COUNT,
        }
    }
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            attack_range: AGENT_ATTACK_RANGE,
            attack_cooldown_secs: AGENT_ATTACK_COOLDOWN_SECS,
            move_speed: AGENT_MOVE_SPEED,
        }
    }
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            max_health: STRUCTURE_MAX_HEALTH,
            footprint: Footprint::default(),
        }
    }
}

impl Default for VocalizationConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: VOCAL_MIN_INTERVAL_SECS,
            max_interval_secs: VOCAL_MAX_INTERVAL_SECS,
            min_volume: VOCAL_MIN_VOLUME,
            max_audible_distance: VOCAL_MAX_AUDIBLE_DISTANCE,
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            waves: vec![
                WaveDefinition::new(1, 4, 60.0, 8.0),
                WaveDefinition::new(2, 6, 80.0, 10.0),
                WaveDefinition::new(3, 8, 100.0, 12.0),
            ],
            difficulty: Difficulty::default(),
            spawn_ring: SpawnRingConfig::default(),
            combat: CombatTuning::default(),
            structure: StructureConfig::default(),
            first_wave_delay_secs: FIRST_WAVE_DELAY_SECS,
            inter_wave_delay_secs: INTER_WAVE_DELAY_SECS,
            death_grace_secs: DEATH_GRACE_SECS,
            vocalization: VocalizationConfig::default(),
        }
    }
}

impl EncounterConfig {
    /// Parse a JSON document. Missing fields take their defaults; the result
    /// still has to pass `validate`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every field once, before the encounter can begin.
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.waves.is_empty() {
            return Err(ConfigError::EmptyWaveTable);
        }
        for (position, wave) in self.waves.iter().enumerate() {
            let expected = position as u32 + 1;
            if wave.index != expected {
                return Err(ConfigError::WaveIndexOutOfOrder {
                    position,
                    expected,
                    found: wave.index,
                });
            }
            if wave.agent_count == 0 {
                return Err(ConfigError::EmptyWave { index: wave.index });
            }
            if !(wave.agent_health.is_finite() && wave.agent_health > 0.0) {
                return Err(ConfigError::InvalidAgentHealth {
                    index: wave.index,
                    value: wave.agent_health,
                });
            }
            if !(wave.agent_damage.is_finite() && wave.agent_damage >= 0.0) {
                return Err(ConfigError::InvalidAgentDamage {
                    index: wave.index,
                    value: wave.agent_damage,
                });
            }
        }

        if !(self.spawn_ring.radius.is_finite() && self.spawn_ring.radius > 0.0) {
            return Err(ConfigError::InvalidSpawnRadius(self.spawn_ring.radius));
        }
        if self.spawn_ring.point_count == 0 {
            return Err(ConfigError::NoSpawnPoints);
        }

        positive("combat.attack_cooldown_secs", self.combat.attack_cooldown_secs)?;
        positive("combat.move_speed", self.combat.move_speed)?;
        non_negative("combat.attack_range", self.combat.attack_range)?;

        positive("structure.max_health", self.structure.max_health)?;
        match self.structure.footprint {
            Footprint::Circle { radius } => positive("structure.footprint.radius", radius)?,
            Footprint::Rect { half_extents } => {
                positive("structure.footprint.half_extents.x", half_extents.x)?;
                positive("structure.footprint.half_extents.y", half_extents.y)?;
            }
        }

        non_negative("first_wave_delay_secs", self.first_wave_delay_secs)?;
        non_negative("inter_wave_delay_secs", self.inter_wave_delay_secs)?;
        non_negative("death_grace_secs", self.death_grace_secs)?;

        let vocal = &self.vocalization;
        if !(vocal.min_interval_secs.is_finite()
            && vocal.max_interval_secs.is_finite()
            && vocal.min_interval_secs > 0.0
            && vocal.max_interval_secs >= vocal.min_interval_secs)
        {
            return Err(ConfigError::InvalidVocalInterval {
                min: vocal.min_interval_secs,
                max: vocal.max_interval_secs,
            });
        }
        if !(0.0..=1.0).contains(&vocal.min_volume) {
            return Err(ConfigError::InvalidMinVolume(vocal.min_volume));
        }
        positive(
            "vocalization.max_audible_distance",
            vocal.max_audible_distance,
        )?;

        Ok(ValidatedConfig(self))
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

/// A configuration that passed `EncounterConfig::validate`.
#[derive(Debug, Clone)]
pub struct ValidatedConfig(EncounterConfig);

impl ValidatedConfig {
    pub fn wave(&self, index: u32) -> Option<&WaveDefinition> {
        index
            .checked_sub(1)
            .and_then(|i| self.0.waves.get(i as usize))
    }

    pub fn wave_count(&self) -> u32 {
        self.0.waves.len() as u32
    }
}

impl Deref for ValidatedConfig {
    type Target = EncounterConfig;

    fn deref(&self) -> &EncounterConfig {
        &self.0
    }
}
