//! `tracing` setup for the two ways the binary runs.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for the terminal showcase.
pub const LOG_ENV_VAR: &str = "STOREFRONT_LOG";

/// Compact stderr logging for one-shot commands, filtered by `RUST_LOG`
/// (default `warn`).
pub fn init_cli_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

/// File logging for the terminal showcase.
///
/// Disabled unless `STOREFRONT_LOG` names a file, so nothing is ever written
/// over the drawn screen. The file gets a `{path}.{timestamp}.{pid}` suffix so
/// concurrent instances never share one.
pub fn init_tui_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn unique_log_path(base: &str) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_gets_timestamp_and_pid() {
        let path = unique_log_path("/tmp/storefront.log");
        let suffix = path.strip_prefix("/tmp/storefront.log.").unwrap();
        let (timestamp, pid) = suffix.split_once('.').unwrap();
        assert!(timestamp.parse::<u64>().unwrap() > 0);
        assert_eq!(pid.parse::<u32>().unwrap(), std::process::id());
    }
}
