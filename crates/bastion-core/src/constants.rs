//! Simulation constants and tuning defaults.

/// Fixed update rate used by `EncounterEngine::tick` (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per fixed tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Upper bound accepted by `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Agents are clamped inside this radius around the structure.
pub const WORLD_RADIUS: f64 = 500.0;

// --- Structure ---

pub const STRUCTURE_MAX_HEALTH: f64 = 1000.0;

/// Default circular footprint radius (meters).
pub const STRUCTURE_FOOTPRINT_RADIUS: f64 = 6.0;

// --- Spawn ring ---

pub const SPAWN_RING_RADIUS: f64 = 80.0;
pub const SPAWN_POINT_COUNT: u32 = 12;

// --- Agent combat ---

/// Melee reach measured from the nearest footprint point (meters).
pub const AGENT_ATTACK_RANGE: f64 = 1.5;

/// Minimum time between two strikes of one agent.
pub const AGENT_ATTACK_COOLDOWN_SECS: f64 = 1.5;

/// Base ground speed before difficulty scaling (m/s).
pub const AGENT_MOVE_SPEED: f64 = 3.5;

// --- Deferred transitions ---

pub const FIRST_WAVE_DELAY_SECS: f64 = 0.0;
pub const INTER_WAVE_DELAY_SECS: f64 = 5.0;

/// Death animation length supplied by presentation.
pub const DEATH_GRACE_SECS: f64 = 2.0;

// --- Vocalization ---

pub const VOCAL_MIN_INTERVAL_SECS: f64 = 4.0;
pub const VOCAL_MAX_INTERVAL_SECS: f64 = 10.0;
pub const VOCAL_MIN_VOLUME: f64 = 0.1;
pub const VOCAL_MAX_AUDIBLE_DISTANCE: f64 = 60.0;
