// src/log.rs
//
// Subscriber setup. Call sites use the logf!/logd!/logw!/loge! shorthands
// from macros.rs, which forward to `tracing`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_DIR, LOG_FILE};

/// Where log lines go.
pub enum LogSink {
    /// Append to `<LOG_DIR>/<LOG_FILE>` (GUI: no console attached on Windows).
    DebugFile,
    /// Stderr, keeping stdout clean for CLI output.
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("provider_dir=info"))
}

fn debug_log_path() -> PathBuf {
    PathBuf::from(LOG_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
/// Falls back to stderr when the debug log cannot be opened.
pub fn init(sink: LogSink) {
    let builder = fmt()
        .with_env_filter(filter())
        .with_timer(fmt::time::Uptime::default())
        .with_target(false);

    let result = match sink {
        LogSink::DebugFile => {
            let path = debug_log_path();
            let opened = fs::create_dir_all(LOG_DIR).and_then(|_| {
                OpenOptions::new().create(true).append(true).open(&path)
            });
            match opened {
                Ok(file) => builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init(),
                Err(e) => {
                    eprintln!("Could not open {}: {e}; logging to stderr", path.display());
                    builder.with_writer(std::io::stderr).try_init()
                }
            }
        }
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };

    // Already installed (tests, repeated init): keep the first one.
    let _ = result;
}
