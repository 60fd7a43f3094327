//! Damage resolution between agents and the structure.
//!
//! The structure has no mitigation; agents subtract their flat defense.
//! Attack cooldowns are enforced by the agent FSM, which only produces a
//! strike once the cooldown has elapsed.

use bastion_core::components::{Health, Structure};

/// Result of one damage application to the structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Health actually removed.
    pub actual: f64,
    /// True only for the call that brought health to zero.
    pub destroyed: bool,
}

impl DamageOutcome {
    const NONE: DamageOutcome = DamageOutcome {
        actual: 0.0,
        destroyed: false,
    };
}

/// Apply `amount` to the structure, clamping at zero.
/// Non-positive amounts and calls after destruction are no-ops.
pub fn apply_damage(structure: &mut Structure, amount: f64) -> DamageOutcome {
    if amount.is_nan() || amount <= 0.0 || structure.is_destroyed() {
        return DamageOutcome::NONE;
    }
    let before = structure.health.current;
    let after = (before - amount).max(0.0);
    structure.health.current = after;
    DamageOutcome {
        actual: before - after,
        destroyed: after <= 0.0,
    }
}

/// Apply host damage to an agent after flat `defense` mitigation.
/// Returns the health actually removed.
pub fn damage_agent(health: &mut Health, defense: f64, amount: f64) -> f64 {
    if amount.is_nan() || amount <= 0.0 || health.is_depleted() {
        return 0.0;
    }
    let actual = (amount - defense).max(0.0).min(health.current);
    health.current -= actual;
    actual
}
