//! Optional append-only session log, one JSON object per line.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SessionEvent {
    Start { seed: u32, width: usize, height: usize },
    LinesCleared { rows: usize, score: u32, level: u32 },
    GameOver {
        score: u32,
        level: u32,
        rank: Option<usize>,
    },
}

/// Writes [`SessionEvent`]s to a file, or discards them when disabled.
#[derive(Debug, Default)]
pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, event: &SessionEvent) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, event)?;
        self.buf.push(b'\n');
        file.write_all(&self.buf)?;
        Ok(())
    }
}
