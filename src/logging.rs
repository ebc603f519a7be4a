//! File logging for the binary.
//!
//! The game owns the terminal while it runs, so log records can only go to a
//! file. Nothing is installed unless a log path is configured.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

/// Appends one line per record to a file
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// `RUST_LOG` as a plain level, `info` if unset or unparsable
pub fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install a [`FileLogger`] for `path` as the global logger.
pub fn init(path: &Path) -> Result<()> {
    let level = level_from_env();
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger)).context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn temp_log(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("termtris-{}-{}.log", std::process::id(), name))
    }

    #[test]
    fn test_records_are_appended() {
        let path = temp_log("append");
        let _ = std::fs::remove_file(&path);

        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();
        logger.log(
            &Record::builder()
                .args(format_args!("game started"))
                .level(Level::Info)
                .target("termtris")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Debug)
                .target("termtris")
                .build(),
        );
        logger.flush();

        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(written, "INFO termtris: game started\n");
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let path = temp_log("missing").join("nested.log");
        assert!(FileLogger::open(&path, LevelFilter::Info).is_err());
    }
}
