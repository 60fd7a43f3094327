//! Logger setup for the runner.

use log::LevelFilter;

/// Install a stderr logger. Simulation crates log through the `log` facade;
/// this is the only place a backend is chosen.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
