//! Append-only text log of daily reports.

use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append `report` under a timestamp header
    pub fn append(&self, report: &str) -> std::io::Result<()> {
        self.append_at(Local::now(), report)
    }

    fn append_at(&self, at: DateTime<Local>, report: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "==== {} ====", at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file, "{}", report.trim_end())?;
        writeln!(file)?;
        Ok(())
    }

    /// Like [`Journal::append`], but a failure is only logged. Losing a journal
    /// entry never stops the simulation.
    pub fn record(&self, report: &str) {
        if let Err(e) = self.append(report) {
            warn!(path = %self.path.display(), error = %e, "Failed to write journal entry");
        }
    }
}
