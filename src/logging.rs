use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Keeps the non-blocking file writer flushing; hold it until shutdown.
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Installs the global subscriber: a stdout layer always, plus a daily
/// rolling file layer when `config.log_dir` is set.
pub fn init_tracing(config: &Config) -> LogGuard {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut guard = None;
    let file_layer = config.log_dir.as_ref().and_then(|dir| {
        if let Err(err) = std::fs::create_dir_all(dir) {
            eprintln!("failed to create log directory {}: {err}", dir.display());
            return None;
        }
        let (writer, worker_guard) =
            tracing_appender::non_blocking(rolling::daily(dir, "gitmaster.log"));
        guard = Some(worker_guard);
        Some(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();

    LogGuard { _guard: guard }
}
