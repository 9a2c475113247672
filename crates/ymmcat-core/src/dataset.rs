//! Dataset artifact and manual override file I/O (JSON).

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use std::path::Path;

use crate::model::{Dataset, ManualOverrides, Plugin};

/// Current time as RFC 3339 UTC with milliseconds, e.g. `2024-05-01T09:30:00.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reads the manual override file. A missing or unreadable file yields empty overrides.
pub fn read_manual_or_empty(path: &Path) -> ManualOverrides {
    match read_manual(path) {
        Ok(Some(manual)) => {
            tracing::info!(
                "manual data: {} plugins, {} category overrides, {} exclusions",
                manual.plugins.len(),
                manual.category_overrides.len(),
                manual.exclude_repos.len()
            );
            manual
        }
        Ok(None) => {
            tracing::debug!("no manual file at {}", path.display());
            ManualOverrides::default()
        }
        Err(e) => {
            tracing::warn!("failed to load manual data: {:#}", e);
            ManualOverrides::default()
        }
    }
}

/// Reads the manual override file; `Ok(None)` when it does not exist.
pub fn read_manual(path: &Path) -> Result<Option<ManualOverrides>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read manual file: {}", path.display())),
    };
    let manual = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse manual file: {}", path.display()))?;
    Ok(Some(manual))
}

/// Writes `plugins` with the current timestamp (creates parent dir if needed).
pub fn write_dataset(path: &Path, plugins: Vec<Plugin>) -> Result<()> {
    let dataset = Dataset {
        last_updated: Some(timestamp_now()),
        plugins,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&dataset).context("serialize dataset")?;
    std::fs::write(path, json).with_context(|| format!("write dataset: {}", path.display()))?;
    Ok(())
}

pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset> {
    serde_json::from_slice(bytes).context("parse dataset")
}

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read dataset: {}", path.display()))?;
    parse_dataset(&bytes)
}
