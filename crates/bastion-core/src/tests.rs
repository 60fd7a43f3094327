#[cfg(test)]
mod tests {
    use crate::commands::HostCommand;
    use crate::config::{EncounterConfig, WaveDefinition};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::types::{bearing_to, AgentId, Footprint, Position};

    #[test]
    fn test_default_config_is_valid() {
        let config = EncounterConfig::default().validate().unwrap();
        assert_eq!(config.wave_count(), 3);
        assert_eq!(config.wave(1).unwrap().index, 1);
        assert!(config.wave(0).is_none());
        assert!(config.wave(4).is_none());
    }

    #[test]
    fn test_empty_wave_table_rejected() {
        let config = EncounterConfig {
            waves: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyWaveTable)
        ));
    }

    #[test]
    fn test_malformed_waves_rejected() {
        let out_of_order = EncounterConfig {
            waves: vec![
                WaveDefinition::new(1, 2, 10.0, 1.0),
                WaveDefinition::new(3, 2, 10.0, 1.0),
            ],
            ..Default::default()
        };
        assert!(matches!(
            out_of_order.validate(),
            Err(ConfigError::WaveIndexOutOfOrder {
                position: 1,
                expected: 2,
                found: 3
            })
        ));

        let empty_wave = EncounterConfig {
            waves: vec![WaveDefinition::new(1, 0, 10.0, 1.0)],
            ..Default::default()
        };
        assert!(matches!(
            empty_wave.validate(),
            Err(ConfigError::EmptyWave { index: 1 })
        ));

        let dead_on_arrival = EncounterConfig {
            waves: vec![WaveDefinition::new(1, 1, 0.0, 1.0)],
            ..Default::default()
        };
        assert!(matches!(
            dead_on_arrival.validate(),
            Err(ConfigError::InvalidAgentHealth { index: 1, .. })
        ));

        let nan_damage = EncounterConfig {
            waves: vec![WaveDefinition::new(1, 1, 5.0, f64::NAN)],
            ..Default::default()
        };
        assert!(matches!(
            nan_damage.validate(),
            Err(ConfigError::InvalidAgentDamage { index: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let mut config = EncounterConfig::default();
        config.spawn_ring.point_count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoSpawnPoints)));

        let mut config = EncounterConfig::default();
        config.combat.attack_cooldown_secs = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "combat.attack_cooldown_secs",
                ..
            })
        ));

        let mut config = EncounterConfig::default();
        config.inter_wave_delay_secs = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "inter_wave_delay_secs",
                ..
            })
        ));

        let mut config = EncounterConfig::default();
        config.vocalization.max_interval_secs = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidVocalInterval { .. })
        ));

        let mut config = EncounterConfig::default();
        config.structure.footprint = Footprint::Rect {
            half_extents: glam::DVec2::new(4.0, 0.0),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let json = r#"{
            "seed": 7,
            "waves": [
                { "index": 1, "agent_count": 2, "agent_health": 20.0, "agent_damage": 3.0 }
            ],
            "difficulty": "Elite"
        }"#;
        let config = EncounterConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, Difficulty::Elite);
        assert_eq!(config.spawn_ring.point_count, 12);
        assert!(config.validate().is_ok());

        assert!(matches!(
            EncounterConfig::from_json("{ \"waves\": 3 }"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_agent_state_transition_graph() {
        use AgentState::*;
        assert!(Approaching.transition(Engaging).is_ok());
        assert!(Engaging.transition(Cooling).is_ok());
        assert!(Cooling.transition(Engaging).is_ok());
        assert!(Cooling.transition(Approaching).is_ok());
        assert!(Engaging.transition(Dying).is_ok());
        assert!(Dying.transition(Removed).is_ok());

        let err = Dying.transition(Dying).unwrap_err();
        assert_eq!(err.from, Dying);
        assert_eq!(err.to, Dying);
        assert!(Removed.transition(Dying).is_err());
        assert!(Removed.transition(Removed).is_err());
        assert!(Approaching.transition(Removed).is_err());
        assert!(Approaching.transition(Cooling).is_err());
        assert!(!Dying.is_live());
        assert!(Cooling.is_live());
    }

    #[test]
    fn test_host_command_serde_tagged() {
        let cmd = HostCommand::DamageAgent {
            agent_id: AgentId(4),
            amount: 12.5,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"DamageAgent\""));
        assert!(json.contains("\"agent_id\":4"));
        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_bearing_clockwise_from_north() {
        let origin = Position::ZERO;
        assert!((bearing_to(origin, Position::new(0.0, 10.0)) - 0.0).abs() < 1e-12);
        let east = bearing_to(origin, Position::new(10.0, 0.0));
        assert!((east - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let west = bearing_to(origin, Position::new(-10.0, 0.0));
        assert!((west - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
