//! Spawn ring around the defended structure.

use std::f64::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::types::Position;

/// Fixed ring of candidate spawn points, computed once per encounter.
#[derive(Debug, Clone)]
pub struct SpawnPointAllocator {
    points: Vec<Position>,
}

impl SpawnPointAllocator {
    /// `count` points on a circle of `radius` around `center`, point `i` at
    /// bearing `i * 2π / count` (0 = North, clockwise).
    pub fn generate(center: Position, radius: f64, count: u32) -> Self {
        let step = TAU / count.max(1) as f64;
        let points = (0..count)
            .map(|i| {
                let bearing = i as f64 * step;
                center + Position::new(bearing.sin(), bearing.cos()) * radius
            })
            .collect();
        Self { points }
    }

    /// Uniform pick with replacement.
    pub fn select(&self, rng: &mut ChaCha8Rng) -> Position {
        self.points[rng.gen_range(0..self.points.len())]
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }
}
