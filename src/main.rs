//! Ventry binary entrypoint kept minimal. The full runtime lives in `app`.

mod api;
mod app;
mod args;
mod config;
mod events;
mod query;
mod state;
mod theme;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct VentryTimer;

impl tracing_subscriber::fmt::time::FormatTime for VentryTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Write to `~/.config/ventry/logs/ventry.log`, falling back to stderr when
/// the file cannot be opened.
fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let log_file = config::logs_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        let path = dir.join("ventry.log");
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
            .map(|file| (path, file))
    });
    match log_file {
        Some((path, file)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(VentryTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %path.display(), "logging initialized");
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(VentryTimer)
                .init();
            tracing::warn!("failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let flags = args::Args::parse();
    init_logging(&flags.log_level);

    let settings = flags.apply(config::load());
    tracing::info!(api = %settings.api_base_url, "Ventry starting");
    if let Err(err) = app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Ventry exited");
}
