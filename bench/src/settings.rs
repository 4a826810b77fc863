use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::BenchError;

#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchSettings {
    /// Queries per timed suite.
    pub iterations: usize,
    /// Number of random shapes each suite cycles through.
    pub shape_count: usize,
    pub seed: u64,
    /// Threads for the parallel pass, all logical cores if not set.
    pub thread_count: Option<usize>,
    pub log_level: LogLevel,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            shape_count: 1024,
            seed: 0x6861_6b6f,
            thread_count: None,
            log_level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

impl BenchSettings {
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let file = std::fs::File::open(path).map_err(BenchError::Io)?;
        serde_yaml::from_reader(file).map_err(BenchError::Settings)
    }
}
