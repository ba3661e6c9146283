//! In-memory target list provider

use std::path::PathBuf;

use super::file::TargetList;
use super::traits::{ConfigResult, TargetListProvider};

/// In-memory target list
#[derive(Debug, Clone, Default)]
pub struct MemoryTargetList {
    list: TargetList,
}

impl MemoryTargetList {
    /// Create a provider over the given paths
    pub fn new<I, P>(targets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            list: TargetList {
                root: None,
                targets: targets.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Resolve targets against `root`
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.list.root = Some(root.into());
        self
    }
}

impl TargetListProvider for MemoryTargetList {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> ConfigResult<TargetList> {
        Ok(self.list.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_target_list() {
        let provider = MemoryTargetList::new(["a.ts", "b.ts"]).with_root("/repo");
        let list = provider.load().unwrap();

        assert_eq!(provider.describe(), "memory");
        assert_eq!(list.root, Some(PathBuf::from("/repo")));
        assert_eq!(list.targets, vec![PathBuf::from("a.ts"), PathBuf::from("b.ts")]);
    }
}
