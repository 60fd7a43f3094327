//! Agent behavior finite state machine.
//!
//! Pure functions that compute state transitions, movement and strikes for one
//! agent per tick. No ECS dependency and no ambient state: the structure and the
//! nearest-point query are handed in through `AgentContext`.

use bastion_core::components::Structure;
use bastion_core::enums::AgentState;
use bastion_core::types::{bearing_to, Position};

use crate::footprint::NearestPointQuery;

/// Remaining cooldown below this is treated as elapsed (absorbs dt rounding).
const COOLDOWN_EPSILON: f64 = 1e-9;

/// Input to the agent FSM for a single entity.
pub struct AgentContext<'a> {
    pub state: AgentState,
    pub position: Position,
    pub orientation: f64,
    pub health: f64,
    pub cooldown_remaining: f64,
    pub cooldown_period: f64,
    pub attack_damage: f64,
    pub attack_range: f64,
    pub move_speed: f64,
    pub dt: f64,
    pub structure: &'a Structure,
    pub nearest: &'a dyn NearestPointQuery,
}

/// Output from the agent FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentUpdate {
    pub new_state: AgentState,
    pub position: Position,
    pub orientation: f64,
    pub cooldown_remaining: f64,
    /// Damage to apply to the structure this tick.
    pub strike: Option<f64>,
    /// States entered this tick, in order. Empty when nothing changed.
    pub entered: Vec<AgentState>,
}

impl AgentUpdate {
    fn unchanged(ctx: &AgentContext) -> Self {
        Self {
            new_state: ctx.state,
            position: ctx.position,
            orientation: ctx.orientation,
            cooldown_remaining: ctx.cooldown_remaining,
            strike: None,
            entered: Vec::new(),
        }
    }

    fn enter(&mut self, state: AgentState) {
        self.new_state = state;
        self.entered.push(state);
    }

    pub fn state_changed(&self) -> bool {
        !self.entered.is_empty()
    }
}

/// Evaluate the FSM for one agent.
pub fn evaluate(ctx: &AgentContext) -> AgentUpdate {
    let mut update = AgentUpdate::unchanged(ctx);

    // Dying and Removed are advanced by the deferred queue, not per tick.
    if !ctx.state.is_live() {
        return update;
    }

    if ctx.health <= 0.0 {
        update.enter(AgentState::Dying);
        return update;
    }

    let target = ctx.nearest.nearest_point(ctx.position);

    match ctx.state {
        AgentState::Approaching => evaluate_approaching(ctx, target, &mut update),
        AgentState::Engaging => evaluate_engaging(ctx, target, &mut update),
        AgentState::Cooling => evaluate_cooling(ctx, target, &mut update),
        AgentState::Dying | AgentState::Removed => {}
    }

    update
}

fn evaluate_approaching(ctx: &AgentContext, target: Position, update: &mut AgentUpdate) {
    let distance = ctx.position.distance(target);
    if distance <= ctx.attack_range {
        update.enter(AgentState::Engaging);
        return;
    }

    let step = (ctx.move_speed * ctx.dt).min(distance);
    let direction = (target - ctx.position) / distance;
    update.position = ctx.position + direction * step;
    update.orientation = bearing_to(ctx.position, target);

    if distance - step <= ctx.attack_range {
        update.enter(AgentState::Engaging);
    }
}

fn evaluate_engaging(ctx: &AgentContext, target: Position, update: &mut AgentUpdate) {
    if ctx.position.distance(target) > ctx.attack_range {
        update.enter(AgentState::Approaching);
        return;
    }
    face(ctx.position, target, update);
    strike_if_ready(ctx, update);
}

fn evaluate_cooling(ctx: &AgentContext, target: Position, update: &mut AgentUpdate) {
    let remaining = ctx.cooldown_remaining - ctx.dt;
    update.cooldown_remaining = if remaining <= COOLDOWN_EPSILON {
        0.0
    } else {
        remaining
    };
    if update.cooldown_remaining > 0.0 {
        return;
    }

    if ctx.position.distance(target) <= ctx.attack_range {
        update.enter(AgentState::Engaging);
        face(ctx.position, target, update);
        strike_if_ready(ctx, update);
    } else {
        update.enter(AgentState::Approaching);
    }
}

/// Strike once the cooldown has elapsed. Damage is instantaneous and does not
/// wait for any attack animation.
fn strike_if_ready(ctx: &AgentContext, update: &mut AgentUpdate) {
    if update.cooldown_remaining > 0.0 || ctx.structure.is_destroyed() {
        return;
    }
    update.strike = Some(ctx.attack_damage);
    update.cooldown_remaining = ctx.cooldown_period;
    update.enter(AgentState::Cooling);
}

fn face(from: Position, target: Position, update: &mut AgentUpdate) {
    if from.distance(target) > f64::EPSILON {
        update.orientation = bearing_to(from, target);
    }
}
