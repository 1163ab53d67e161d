// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use log::{LevelFilter, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Appends log lines to a file; the terminal belongs to the UI while it runs.
struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let logger = FileLogger::open(path, level)?;
    if LOGGER.set(logger).is_err() {
        bail!("logger already initialized");
    }
    let logger = LOGGER
        .get()
        .ok_or_else(|| anyhow!("logger missing after initialization"))?;
    log::set_logger(logger).map_err(|error| anyhow!("install logger: {error}"))?;
    log::set_max_level(level);
    Ok(())
}

/// Installs the file logger when `path` resolves and opens. Otherwise the
/// viewer runs without a log and the reason goes to stderr.
pub fn init_or_disable(path: Result<PathBuf>, level: LevelFilter) -> bool {
    match path.and_then(|path| init(&path, level)) {
        Ok(()) => true,
        Err(error) => {
            eprintln!("logging disabled: {error:#}");
            false
        }
    }
}

impl FileLogger {
    fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}; set [log].path", path.display()))?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(OffsetDateTime::now_utc(), record);
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = file.write_all(line.as_bytes());
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn format_line(now: OffsetDateTime, record: &Record) -> String {
    let timestamp = now.format(&Rfc3339).unwrap_or_else(|_| "-".to_owned());
    format!(
        "{timestamp} {:<5} {}: {}\n",
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::{FileLogger, format_line, init_or_disable};
    use anyhow::{Result, anyhow};
    use log::{Level, LevelFilter, Log, Record};
    use time::OffsetDateTime;

    #[test]
    fn format_line_has_timestamp_level_and_target() {
        let line = format_line(
            OffsetDateTime::UNIX_EPOCH,
            &Record::builder()
                .args(format_args!("loaded 118 elements"))
                .level(Level::Info)
                .target("ptable_data")
                .build(),
        );
        assert_eq!(
            line,
            "1970-01-01T00:00:00Z INFO  ptable_data: loaded 118 elements\n"
        );
    }

    #[test]
    fn file_logger_filters_by_level_and_appends() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("nested").join("ptable.log");
        let logger = FileLogger::open(&path, LevelFilter::Warn)?;

        logger.log(
            &Record::builder()
                .args(format_args!("dataset unavailable"))
                .level(Level::Warn)
                .target("ptable_tui")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("publishing 0 elements"))
                .level(Level::Debug)
                .target("ptable_tui")
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path)?;
        assert!(contents.contains("WARN  ptable_tui: dataset unavailable"));
        assert!(!contents.contains("publishing"));
        assert_eq!(contents.lines().count(), 1);
        Ok(())
    }

    #[test]
    fn unresolved_log_path_disables_logging() {
        assert!(!init_or_disable(
            Err(anyhow!("cannot resolve cache directory; set [log].path")),
            LevelFilter::Info,
        ));
    }

    #[test]
    fn unwritable_log_path_disables_logging() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory")?;

        assert!(!init_or_disable(
            Ok(blocker.join("ptable.log")),
            LevelFilter::Info
        ));
        Ok(())
    }
}
