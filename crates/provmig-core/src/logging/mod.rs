//! Logging abstractions used by the migration drivers
//!
//! Drivers take a [`Logger`] so the same code can report to a terminal,
//! stay silent, or be captured in tests. Per-pass tracing goes through the
//! global [`file_logger`] instead, which is off unless `PROVMIG_DEBUG` is set.

mod traits;
mod noop;
mod console;
mod memory;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::{MemoryLogger, LogRecord};

pub use file_logger::{log, trace, debug, info, warn, error, log_file_path, LogLevel};
