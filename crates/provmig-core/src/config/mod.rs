//! Batch target list configuration
//!
//! The batch migrator never owns its file list. A list comes from one of:
//! - `FileTargetList`: YAML file (explicit path, workspace or user level)
//! - `MemoryTargetList`: In-memory, for tests and embedding
//! - the built-in fixture list, when no file is found

mod traits;
mod memory;
mod file;
mod defaults;
mod resolve;

pub use traits::{TargetListProvider, ConfigError, ConfigResult};
pub use memory::MemoryTargetList;
pub use file::{FileTargetList, TargetList, ConfigLevel};
pub use defaults::{default_target_list, DEFAULT_TARGETS};
pub use resolve::{resolve_target_list, ResolvedTargets, TargetSource};
