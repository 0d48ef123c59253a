use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn};
use parking_lot::deadlock;
use crate::config::structs::configuration::Configuration;

/// Installs the global logger at the level named in `config`. Fails when a
/// logger is already installed.
pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(config.log_level_filter())
        .chain(std::io::stdout())
        .apply()?;

    info!("logging initialized.");
    Ok(())
}

/// Logs every deadlock `parking_lot` detected since the last call and
/// returns how many were found.
pub fn report_deadlocks() -> usize {
    let deadlocks = deadlock::check_deadlock();
    if !deadlocks.is_empty() {
        warn!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
        for (i, threads) in deadlocks.iter().enumerate() {
            warn!("[DEADLOCK] #{i}");
            for t in threads {
                warn!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                warn!("[DEADLOCK] {:#?}", t.backtrace());
            }
        }
    }
    deadlocks.len()
}
