#[cfg(test)]
mod tests {
    use bastion_core::components::Structure;
    use bastion_core::config::{CombatTuning, VocalizationConfig, WaveDefinition};
    use bastion_core::enums::{AgentState, Difficulty};
    use bastion_core::types::{Footprint, Position};

    use crate::footprint::{radial_exit_point, NearestPointQuery};
    use crate::fsm::{evaluate, AgentContext};
    use crate::profiles::scaled_stats;
    use crate::vocal::cue_volume;

    fn structure() -> Structure {
        Structure::new(Position::ZERO, 100.0, Footprint::Circle { radius: 5.0 })
    }

    fn make_context<'a>(
        structure: &'a Structure,
        state: AgentState,
        position: Position,
        cooldown_remaining: f64,
    ) -> AgentContext<'a> {
        AgentContext {
            state,
            position,
            orientation: 0.0,
            health: 10.0,
            cooldown_remaining,
            cooldown_period: 1.0,
            attack_damage: 5.0,
            attack_range: 1.0,
            move_speed: 4.0,
            dt: 0.5,
            structure,
            nearest: structure,
        }
    }

    #[test]
    fn test_circle_exit_point_is_radial() {
        let s = structure();
        let p = s.nearest_point(Position::new(30.0, 40.0));
        assert!((p - Position::new(3.0, 4.0)).length() < 1e-12);
    }

    #[test]
    fn test_rect_exit_point_hits_nearest_face() {
        let footprint = Footprint::Rect {
            half_extents: Position::new(4.0, 2.0),
        };
        let p = radial_exit_point(&footprint, Position::ZERO, Position::new(20.0, 0.0));
        assert!((p - Position::new(4.0, 0.0)).length() < 1e-12);

        // Diagonal ray leaves through the short (y) face first.
        let p = radial_exit_point(&footprint, Position::ZERO, Position::new(10.0, 10.0));
        assert!((p - Position::new(2.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_point_inside_footprint_is_its_own_target() {
        let s = structure();
        let inside = Position::new(1.0, 1.0);
        assert_eq!(s.nearest_point(inside), inside);
        assert_eq!(s.nearest_point(Position::ZERO), Position::ZERO);
    }

    #[test]
    fn test_approaching_moves_toward_footprint() {
        let s = structure();
        let ctx = make_context(&s, AgentState::Approaching, Position::new(0.0, 25.0), 0.0);
        let update = evaluate(&ctx);
        assert!(!update.state_changed());
        assert_eq!(update.new_state, AgentState::Approaching);
        // 4 m/s * 0.5 s = 2 m closer, heading South.
        assert!((update.position - Position::new(0.0, 23.0)).length() < 1e-12);
        assert!((update.orientation - std::f64::consts::PI).abs() < 1e-12);
        assert!(update.strike.is_none());
    }

    #[test]
    fn test_approaching_never_overshoots() {
        let s = structure();
        let mut ctx = make_context(&s, AgentState::Approaching, Position::new(0.0, 6.5), 0.0);
        ctx.move_speed = 100.0;
        let update = evaluate(&ctx);
        assert!((update.position - Position::new(0.0, 5.0)).length() < 1e-12);
        assert_eq!(update.entered, vec![AgentState::Engaging]);
    }

    #[test]
    fn test_approaching_in_range_engages_without_moving() {
        let s = structure();
        let start = Position::new(0.0, 5.5);
        let ctx = make_context(&s, AgentState::Approaching, start, 0.0);
        let update = evaluate(&ctx);
        assert_eq!(update.entered, vec![AgentState::Engaging]);
        assert_eq!(update.position, start);
        assert!(update.strike.is_none());
    }

    #[test]
    fn test_engaging_strikes_and_starts_cooldown() {
        let s = structure();
        let ctx = make_context(&s, AgentState::Engaging, Position::new(0.0, 5.5), 0.0);
        let update = evaluate(&ctx);
        assert_eq!(update.strike, Some(5.0));
        assert_eq!(update.new_state, AgentState::Cooling);
        assert_eq!(update.cooldown_remaining, 1.0);
    }

    #[test]
    fn test_engaging_out_of_range_returns_to_approaching() {
        let s = structure();
        let ctx = make_context(&s, AgentState::Engaging, Position::new(0.0, 9.0), 0.0);
        let update = evaluate(&ctx);
        assert_eq!(update.entered, vec![AgentState::Approaching]);
        assert!(update.strike.is_none());
    }

    #[test]
    fn test_cooling_counts_down_then_strikes_again() {
        let s = structure();
        let ctx = make_context(&s, AgentState::Cooling, Position::new(0.0, 5.5), 1.0);
        let first = evaluate(&ctx);
        assert_eq!(first.new_state, AgentState::Cooling);
        assert!((first.cooldown_remaining - 0.5).abs() < 1e-12);
        assert!(first.strike.is_none());

        let ctx = make_context(&s, AgentState::Cooling, Position::new(0.0, 5.5), 0.5);
        let second = evaluate(&ctx);
        assert_eq!(
            second.entered,
            vec![AgentState::Engaging, AgentState::Cooling]
        );
        assert_eq!(second.strike, Some(5.0));
        assert_eq!(second.cooldown_remaining, 1.0);
    }

    #[test]
    fn test_cooling_clamps_underflow() {
        let s = structure();
        let ctx = make_context(&s, AgentState::Cooling, Position::new(0.0, 9.0), 0.1);
        let update = evaluate(&ctx);
        assert_eq!(update.cooldown_remaining, 0.0);
        assert_eq!(update.entered, vec![AgentState::Approaching]);
    }

    #[test]
    fn test_no_strike_on_destroyed_structure() {
        let mut s = structure();
        s.health.current = 0.0;
        let ctx = make_context(&s, AgentState::Engaging, Position::new(0.0, 5.5), 0.0);
        let update = evaluate(&ctx);
        assert!(update.strike.is_none());
        assert_eq!(update.new_state, AgentState::Engaging);
    }

    #[test]
    fn test_depleted_health_enters_dying_from_any_live_state() {
        let s = structure();
        for state in [
            AgentState::Approaching,
            AgentState::Engaging,
            AgentState::Cooling,
        ] {
            let mut ctx = make_context(&s, state, Position::new(0.0, 5.5), 0.0);
            ctx.health = 0.0;
            let update = evaluate(&ctx);
            assert_eq!(update.entered, vec![AgentState::Dying]);
            assert!(update.strike.is_none());
        }
    }

    #[test]
    fn test_dying_and_removed_are_inert() {
        let s = structure();
        for state in [AgentState::Dying, AgentState::Removed] {
            let mut ctx = make_context(&s, state, Position::new(0.0, 30.0), 0.0);
            ctx.health = 0.0;
            let update = evaluate(&ctx);
            assert!(!update.state_changed());
            assert_eq!(update.position, Position::new(0.0, 30.0));
        }
    }

    #[test]
    fn test_stats_scale_linearly_with_wave_index() {
        let tuning = CombatTuning {
            attack_range: 1.0,
            attack_cooldown_secs: 2.0,
            move_speed: 10.0,
        };
        let first = scaled_stats(
            Difficulty::Veteran,
            &WaveDefinition::new(1, 3, 50.0, 4.0),
            &tuning,
        );
        assert_eq!(first.move_speed, 10.0);
        assert_eq!(first.defense, 1.0);
        assert_eq!(first.max_health, 50.0);
        assert_eq!(first.attack_damage, 4.0);

        let third = scaled_stats(
            Difficulty::Veteran,
            &WaveDefinition::new(3, 3, 50.0, 4.0),
            &tuning,
        );
        assert!((third.move_speed - 11.0).abs() < 1e-12);
        assert_eq!(third.defense, 3.0);

        let elite = scaled_stats(
            Difficulty::Elite,
            &WaveDefinition::new(1, 3, 50.0, 4.0),
            &tuning,
        );
        assert!(elite.move_speed > first.move_speed);
    }

    #[test]
    fn test_cue_volume_curve() {
        let config = VocalizationConfig {
            min_interval_secs: 1.0,
            max_interval_secs: 2.0,
            min_volume: 0.2,
            max_audible_distance: 50.0,
        };
        assert_eq!(cue_volume(0.0, &config), Some(1.0));
        assert_eq!(cue_volume(25.0, &config), Some(0.5));
        // Far edge is floored at the minimum volume.
        assert_eq!(cue_volume(45.0, &config), Some(0.2));
        assert_eq!(cue_volume(50.5, &config), None);
    }
}
