use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use swarm_data::TickStats;

/// One line of `ticks.jsonl`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickRecord {
    pub timestamp: String,
    pub stats: TickStats,
}

/// Appends tick statistics to `<dir>/ticks.jsonl`.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    log_dir: PathBuf,
    interval: u64,
}

impl HistoryLogger {
    pub fn new_at(dir: impl AsRef<Path>, interval: u64) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("ticks.jsonl"))?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: dir.to_path_buf(),
            interval: interval.max(1),
        })
    }

    /// A logger that drops everything.
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            log_dir: PathBuf::new(),
            interval: 1,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.live_file.is_some()
    }

    /// Writes `stats` if its tick falls on the logging interval.
    pub fn record(&mut self, stats: &TickStats) -> Result<bool> {
        if stats.tick % self.interval != 0 {
            return Ok(false);
        }
        let Some(file) = self.live_file.as_mut() else {
            return Ok(false);
        };
        let record = TickRecord {
            timestamp: chrono::Utc::now().to_rfc3339(),
            stats: stats.clone(),
        };
        writeln!(file, "{}", serde_json::to_string(&record)?)?;
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(file) = self.live_file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Reads back every well-formed record; malformed lines are skipped.
    pub fn read_snapshots(&self) -> Result<Vec<TickRecord>> {
        read_records(self.log_dir.join("ticks.jsonl"))
    }
}

impl Drop for HistoryLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(error = %e, "Failed to flush tick history");
        }
    }
}

pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<TickRecord>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(e.into()),
    };
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines().map_while(std::result::Result::ok) {
        if let Ok(record) = serde_json::from_str::<TickRecord>(&line) {
            records.push(record);
        }
    }
    Ok(records)
}
