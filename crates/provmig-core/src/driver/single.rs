//! Single-file migrator

use std::fs;
use std::path::Path;

use crate::engine::{Migration, Pipeline};
use crate::error::{MigrateError, MigrateResult};
use crate::log_debug;
use crate::logging::Logger;

/// Migrate one file with the reduced pipeline
///
/// The result is always written back, even when nothing matched. Any read or
/// write failure is returned to the caller.
pub fn migrate_file(path: &Path, logger: &dyn Logger) -> MigrateResult<Migration> {
    let original = fs::read_to_string(path).map_err(|e| MigrateError::io(path, e))?;

    let migration = Pipeline::single_file().run(&original);
    log_debug!(logger, "{}: {} provider(s) rewritten", path.display(), migration.rewrites);

    fs::write(path, &migration.text).map_err(|e| MigrateError::io(path, e))?;
    Ok(migration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};
    use std::time::SystemTime;
    use tempfile::tempdir;

    #[test]
    fn test_migrates_block_and_inline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.test.ts");
        fs::write(
            &path,
            "const a = { providers: { openai: { apiKey: 'a' }, xai: { apiKey: 'x' } } };\nsetup({ anthropic: { apiKey: 'b' } });\n",
        )
        .unwrap();

        let logger = MemoryLogger::new();
        let migration = migrate_file(&path, &logger).unwrap();

        assert_eq!(migration.rewrites, 3);
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, migration.text);
        assert_eq!(written.matches("default: {").count(), 3);
        assert_eq!(logger.messages(LogLevel::Debug).len(), 1);
    }

    #[test]
    fn test_no_match_still_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.ts");
        let text = "export const x = { apiKey: 'k' };\n";
        fs::write(&path, text).unwrap();
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH)
            .unwrap();

        let migration = migrate_file(&path, &NoOpLogger).unwrap();

        assert_eq!(migration.rewrites, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        assert!(modified > SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = migrate_file(&dir.path().join("nope.ts"), &NoOpLogger).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_directory_is_error() {
        let dir = tempdir().unwrap();
        let err = migrate_file(dir.path(), &NoOpLogger).unwrap_err();
        assert!(matches!(err, MigrateError::Io { .. }));
    }
}
