//! Single-file JSON store.
//!
//! # Responsibility
//! - Bootstrap the backing file location on first use.
//! - Read and atomically rewrite the full collection, pretty-printed for
//!   human inspection.
//!
//! # Invariants
//! - Saves go through a sibling temp file and a rename, so a crashed save
//!   never leaves a torn document behind.
//! - An unreadable document is renamed aside before being treated as an
//!   empty collection, so the lenient recovery cannot destroy data.

use super::{StoreResult, TaskStore};
use crate::model::task::Task;
use log::{error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File-backed task store handle.
///
/// Opened once at process start against an explicit path and passed to the
/// service; there is no module-level store path.
pub struct JsonStore {
    file_path: PathBuf,
}

impl JsonStore {
    /// Opens the store, creating the parent directory and an empty
    /// collection file when absent.
    ///
    /// # Side effects
    /// - May create directories and the backing file.
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<JsonStore> {
        let started_at = Instant::now();
        let file_path = path.into();

        let result = bootstrap_file(&file_path);
        match result {
            Ok(()) => {
                info!(
                    "event=store_open module=store status=ok path={} duration_ms={}",
                    file_path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(JsonStore { file_path })
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error path={} duration_ms={} error={}",
                    file_path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Path of the backing collection file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Moves an unreadable document aside so the next save cannot silently
    /// destroy it. Best effort: a failed rename only logs.
    fn preserve_corrupt_file(&self) {
        let mut aside = self.file_path.as_os_str().to_owned();
        aside.push(".corrupt");
        match fs::rename(&self.file_path, PathBuf::from(&aside)) {
            Ok(()) => warn!(
                "event=store_load module=store status=recovered detail=corrupt_file_preserved path={}",
                PathBuf::from(aside).display()
            ),
            Err(err) => warn!(
                "event=store_load module=store status=recovered detail=corrupt_file_left_in_place error={err}"
            ),
        }
    }
}

impl TaskStore for JsonStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let raw = match fs::read_to_string(&self.file_path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=recovered path={} error={}",
                    self.file_path.display(),
                    err
                );
                self.preserve_corrupt_file();
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let started_at = Instant::now();
        let body = serde_json::to_string_pretty(tasks)?;

        let mut tmp = self.file_path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp_path = PathBuf::from(tmp);

        let result = fs::write(&tmp_path, body.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, &self.file_path));
        match result {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} error={}",
                    self.file_path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

fn bootstrap_file(file_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if !file_path.exists() {
        fs::write(file_path, b"[]")?;
    }
    Ok(())
}
