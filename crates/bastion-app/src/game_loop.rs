//! Headless game loop: drives the encounter engine to a terminal outcome.
//!
//! A scripted defender stands in for the player. Each update it aims at the
//! live agent closest to the structure and issues `DamageAgent` commands at a
//! fixed damage-per-second rate.

use anyhow::ensure;
use log::{debug, info};
use serde::Serialize;

use bastion_core::commands::HostCommand;
use bastion_core::enums::Outcome;
use bastion_core::events::EncounterEvent;
use bastion_core::state::EncounterSnapshot;
use bastion_core::types::AgentId;
use bastion_sim::EncounterEngine;

/// Pacing and defender settings for one headless run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Simulated seconds per update.
    pub dt: f64,
    /// Give up after this much simulated time.
    pub max_secs: f64,
    /// Defender output; zero leaves the structure undefended.
    pub defender_dps: f64,
}

impl RunOptions {
    /// Reject pacing that would never advance the clock or never stop.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.dt.is_finite() && self.dt > 0.0,
            "dt must be a positive number of seconds, got {}",
            self.dt
        );
        ensure!(
            self.max_secs.is_finite() && self.max_secs >= 0.0,
            "max_secs must be a finite, non-negative number, got {}",
            self.max_secs
        );
        Ok(())
    }
}

/// Summary of a finished (or abandoned) run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// `None` when `max_secs` ran out first.
    pub outcome: Option<Outcome>,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub waves_completed: u32,
    pub total_waves: u32,
    pub agents_spawned: u32,
    pub agents_skipped: u32,
    pub agents_removed: u32,
    pub structure_health: f64,
    pub structure_max_health: f64,
}

/// Start the encounter and run it until it ends or `max_secs` elapses.
pub fn run(engine: &mut EncounterEngine, options: &RunOptions) -> anyhow::Result<RunReport> {
    options.validate()?;
    let mut report = RunReport::default();
    engine.queue_command(HostCommand::StartEncounter);

    loop {
        // 1. Advance one update
        let snapshot = engine.update(options.dt);

        // 2. Fold events into the report
        for event in &snapshot.events {
            record(&mut report, event);
        }
        report.ticks = snapshot.time.tick;
        report.elapsed_secs = snapshot.time.elapsed_secs;
        report.total_waves = snapshot.wave.total_waves;
        report.structure_health = snapshot.structure.health;
        report.structure_max_health = snapshot.structure.max_health;

        if snapshot.terminal.is_some() || snapshot.time.elapsed_secs >= options.max_secs {
            report.outcome = snapshot.terminal;
            return Ok(report);
        }

        // 3. Defender fires for the next update
        if let Some(target) = pick_target(&snapshot) {
            let amount = options.defender_dps * options.dt;
            if amount > 0.0 {
                engine.queue_command(HostCommand::DamageAgent {
                    agent_id: target,
                    amount,
                });
            }
        }
    }
}

fn record(report: &mut RunReport, event: &EncounterEvent) {
    match event {
        EncounterEvent::WaveStarted {
            index,
            spawned,
            skipped,
        } => {
            debug!("wave {index}: {spawned} spawned, {skipped} skipped");
            report.agents_spawned += spawned;
            report.agents_skipped += skipped;
        }
        EncounterEvent::AgentRemoved { .. } => report.agents_removed += 1,
        EncounterEvent::WaveComplete { index } => {
            info!("wave {index} cleared");
            report.waves_completed += 1;
        }
        EncounterEvent::EncounterEnded { outcome } => info!("outcome: {outcome:?}"),
        _ => {}
    }
}

/// Live agent nearest to the structure; lowest id breaks ties.
fn pick_target(snapshot: &EncounterSnapshot) -> Option<AgentId> {
    let center = snapshot.structure.position;
    snapshot
        .agents
        .iter()
        .filter(|agent| agent.state.is_live())
        .min_by(|a, b| {
            a.position
                .distance_squared(center)
                .total_cmp(&b.position.distance_squared(center))
                .then(a.id.cmp(&b.id))
        })
        .map(|agent| agent.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::config::{EncounterConfig, StructureConfig};
    use bastion_core::constants::DT;
    use bastion_core::enums::{AgentState, GamePhase};
    use bastion_core::state::AgentView;
    use bastion_core::types::Position;

    fn options(defender_dps: f64) -> RunOptions {
        RunOptions {
            dt: DT,
            max_secs: 600.0,
            defender_dps,
        }
    }

    fn view(id: u32, position: Position, state: AgentState) -> AgentView {
        AgentView {
            id: AgentId(id),
            position,
            orientation: 0.0,
            state,
            health: 1.0,
            max_health: 1.0,
        }
    }

    #[test]
    fn test_strong_defender_wins_default_encounter() {
        let mut engine = EncounterEngine::new(EncounterConfig::default()).unwrap();
        let report = run(&mut engine, &options(400.0)).unwrap();

        assert_eq!(report.outcome, Some(Outcome::Won));
        assert_eq!(report.waves_completed, 3);
        assert_eq!(report.agents_spawned, 18);
        assert_eq!(report.agents_removed, 18);
        assert_eq!(engine.phase(), GamePhase::Ended);
    }

    #[test]
    fn test_undefended_structure_falls() {
        let config = EncounterConfig {
            structure: StructureConfig {
                max_health: 50.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut engine = EncounterEngine::new(config).unwrap();
        let report = run(&mut engine, &options(0.0)).unwrap();

        assert_eq!(report.outcome, Some(Outcome::Lost));
        assert_eq!(report.structure_health, 0.0);
        assert_eq!(report.waves_completed, 0);
    }

    #[test]
    fn test_time_limit_abandons_run() {
        let mut engine = EncounterEngine::new(EncounterConfig::default()).unwrap();
        let report = run(
            &mut engine,
            &RunOptions {
                dt: 0.5,
                max_secs: 2.0,
                defender_dps: 0.0,
            },
        )
        .unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!(report.ticks, 4);
        assert_eq!(report.agents_spawned, 4);
    }

    #[test]
    fn test_pacing_that_cannot_finish_is_rejected() {
        let mut engine = EncounterEngine::new(EncounterConfig::default()).unwrap();
        let bad = [
            RunOptions { dt: 0.0, ..options(60.0) },
            RunOptions { dt: -0.5, ..options(60.0) },
            RunOptions { dt: f64::NAN, ..options(60.0) },
            RunOptions { max_secs: f64::NAN, ..options(60.0) },
            RunOptions { max_secs: f64::INFINITY, ..options(60.0) },
        ];
        for opts in &bad {
            assert!(run(&mut engine, opts).is_err(), "{opts:?} accepted");
        }
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert!(options(60.0).validate().is_ok());
    }

    #[test]
    fn test_target_is_nearest_live_agent() {
        let snapshot = EncounterSnapshot {
            agents: vec![
                view(0, Position::new(0.0, 3.0), AgentState::Dying),
                view(1, Position::new(0.0, 20.0), AgentState::Approaching),
                view(2, Position::new(10.0, 0.0), AgentState::Cooling),
                view(3, Position::new(-10.0, 0.0), AgentState::Engaging),
            ],
            ..Default::default()
        };
        assert_eq!(pick_target(&snapshot), Some(AgentId(2)));
        assert_eq!(pick_target(&EncounterSnapshot::default()), None);
    }

    #[test]
    fn test_report_serializes() {
        let report = RunReport {
            outcome: Some(Outcome::Won),
            ..Default::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"outcome\":\"Won\""));
    }
}
