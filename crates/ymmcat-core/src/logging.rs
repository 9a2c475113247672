//! Tracing setup. Collector runs log to a file under the XDG state dir so a
//! scheduled `ymmcat collect` leaves a trail; stderr is the fallback.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,ymmcat=debug";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// `~/.local/state/ymmcat/ymmcat.log`.
    pub fn state_file() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("ymmcat")?;
        Ok(LogTarget::File(
            xdg_dirs.get_state_home().join("ymmcat").join("ymmcat.log"),
        ))
    }

    /// Opens the target for appending, creating the log directory first.
    pub fn make_writer(&self) -> Result<BoxMakeWriter> {
        match self {
            LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            LogTarget::File(path) => {
                if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("create log dir: {}", dir.display()))?;
                }
                let file = fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("open log file: {}", path.display()))?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber for `target`.
pub fn init(target: &LogTarget) -> Result<()> {
    let writer = target.make_writer()?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))
}

/// Logs to the state file when possible, otherwise to stderr.
/// Returns the target that ended up installed.
pub fn init_default() -> LogTarget {
    let file_target = LogTarget::state_file().and_then(|t| init(&t).map(|()| t));
    match file_target {
        Ok(target) => target,
        Err(e) => {
            let _ = init(&LogTarget::Stderr);
            tracing::warn!("file logging unavailable ({:#}); logging to stderr", e);
            LogTarget::Stderr
        }
    }
}
