//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that plugs into the `log`
//! crate and doubles as a report sink for CLI commands.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::rtf::types::PictureGroup;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a table of RTF picture groups
    ///
    /// # Arguments
    ///
    /// * `groups` - Picture groups in document order
    pub fn print_picture_groups(&self, groups: &[PictureGroup]) -> io::Result<()> {
        self.log("Picture groups:")?;

        for (index, group) in groups.iter().enumerate() {
            let tag = group.blip_tag
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());
            let message = format!(
                "  #{} offset: {}, kind: {}, bliptag: {}, bytes: {}",
                index, group.offset, group.kind, tag, group.byte_len()
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        // Only the first call installs a logger
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Diagnostics go to stderr so that stdout stays clean for output
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::rtf::types::BlipKind;

    #[test]
    fn test_log_writes_lines() {
        let path = std::env::temp_dir().join("pastekit_logger_test.log");
        let path_str = path.to_str().unwrap();
        let logger = Logger::new(path_str).unwrap();

        logger.log("first").unwrap();
        logger.print_picture_groups(&[PictureGroup {
            offset: 12,
            kind: BlipKind::Png,
            blip_tag: Some(-5),
            hex_data: "89504e47".to_string(),
        }]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("first\n"));
        assert!(contents.contains("#0 offset: 12, kind: PNG, bliptag: -5, bytes: 4"));
        let _ = fs::remove_file(&path);
    }
}
