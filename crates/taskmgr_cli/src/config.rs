//! Data-directory resolution.
//!
//! # Responsibility
//! - Decide once, at process start, where the task store and logs live.
//!
//! The resolved paths are passed down explicitly; nothing below this layer
//! reads the environment.

use std::env;
use std::path::PathBuf;

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "TASKMGR_DATA_DIR";

const TASKS_FILE_NAME: &str = "tasks.json";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_DIR_NAME: &str = ".taskmgr";

/// Filesystem locations for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub tasks_file: PathBuf,
    pub log_dir: PathBuf,
}

/// Resolves the data directory: explicit flag, then `TASKMGR_DATA_DIR`,
/// then `~/.taskmgr`.
pub fn resolve(override_dir: Option<PathBuf>) -> DataPaths {
    let data_dir = override_dir
        .or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(default_data_dir);
    DataPaths {
        tasks_file: data_dir.join(TASKS_FILE_NAME),
        log_dir: data_dir.join(LOG_DIR_NAME),
        data_dir,
    }
}

fn default_data_dir() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_DIR_NAME))
        // No HOME at all: fall back to a relative directory rather than fail.
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use std::path::PathBuf;

    #[test]
    fn explicit_override_wins() {
        let paths = resolve(Some(PathBuf::from("/tmp/custom")));
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/custom"));
        assert_eq!(paths.tasks_file, PathBuf::from("/tmp/custom/tasks.json"));
        assert_eq!(paths.log_dir, PathBuf::from("/tmp/custom/logs"));
    }
}
