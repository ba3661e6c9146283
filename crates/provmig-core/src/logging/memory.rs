//! In-memory logger for tests

use std::sync::Mutex;

use super::file_logger::LogLevel;
use super::traits::Logger;

/// A single captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that keeps every record in memory
///
/// Used to assert on the per-file lines a batch run emits.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    /// Create an empty memory logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Messages captured at `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    /// Whether any record contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records().iter().any(|r| r.message.contains(needle))
    }

    fn push(&self, level: LogLevel, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LogRecord {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures_in_order() {
        let logger = MemoryLogger::new();
        logger.info("first");
        logger.error("second");
        crate::log_info!(logger, "third {}", 3);

        let records = logger.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].level, LogLevel::Error);
        assert_eq!(logger.messages(LogLevel::Info), vec!["first", "third 3"]);
        assert!(logger.contains("second"));
        assert!(!logger.contains("fourth"));
    }

    #[test]
    fn test_log_macros() {
        let logger = MemoryLogger::new();
        crate::log_warn!(logger, "{} file(s) skipped", 2);
        assert_eq!(logger.messages(LogLevel::Warn), vec!["2 file(s) skipped"]);
    }
}
