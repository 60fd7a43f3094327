use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use bastion_app::game_loop::{self, RunOptions};
use bastion_app::logging;
use bastion_core::config::EncounterConfig;
use bastion_core::constants::DT;
use bastion_core::enums::ScenarioId;
use bastion_sim::scenario;
use bastion_sim::EncounterEngine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    Skirmish,
    Siege,
    Onslaught,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl From<Scenario> for ScenarioId {
    fn from(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Skirmish => ScenarioId::Skirmish,
            Scenario::Siege => ScenarioId::Siege,
            Scenario::Onslaught => ScenarioId::Onslaught,
        }
    }
}

/// Run a BASTION encounter headless and report the outcome.
#[derive(Debug, Parser)]
#[command(name = "bastion", version)]
struct Args {
    /// JSON encounter config. Overrides --scenario.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in preset used when no config file is given.
    #[arg(long, value_enum, default_value_t = Scenario::Skirmish)]
    scenario: Scenario,

    /// Override the RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many simulated seconds.
    #[arg(long, default_value_t = 600.0)]
    max_secs: f64,

    /// Simulated seconds per update.
    #[arg(long, default_value_t = DT)]
    dt: f64,

    /// Scripted defender damage per second.
    #[arg(long, default_value_t = 60.0)]
    defender_dps: f64,

    /// Print the final report as JSON.
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level.into()).context("installing logger")?;

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            EncounterConfig::from_json(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => scenario::build_config(args.scenario.into()),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut engine = EncounterEngine::new(config).context("invalid encounter config")?;
    info!(
        "running {} waves at {} dps",
        engine.config().wave_count(),
        args.defender_dps
    );

    let report = game_loop::run(
        &mut engine,
        &RunOptions {
            dt: args.dt,
            max_secs: args.max_secs,
            defender_dps: args.defender_dps,
        },
    )
    .context("invalid run options")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let outcome = report
            .outcome
            .map_or_else(|| "unresolved".to_string(), |o| format!("{o:?}"));
        println!(
            "{outcome} after {:.1}s: {}/{} waves cleared, {} agents spawned ({} skipped), structure {:.0}/{:.0}",
            report.elapsed_secs,
            report.waves_completed,
            report.total_waves,
            report.agents_spawned,
            report.agents_skipped,
            report.structure_health,
            report.structure_max_health,
        );
    }
    Ok(())
}
