//! JSON persistence helpers
//!
//! Every data file (ledger, preferences) is a single pretty-printed JSON
//! document. Reads treat a missing file as empty; writes go through a
//! sibling `.json.tmp` file that is renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Storage(format!("Cannot {} {}: {}", action, path.display(), err))
}

/// Load a JSON document, or `T::default()` when the file has not been created yet
pub fn read_json<T, P>(path: P) -> ExpenseResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a JSON document in one step
///
/// Readers see either the previous contents or the new ones, never a
/// partially written file. Missing parent directories are created.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> ExpenseResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let staging = path.with_extension("json.tmp");

    let result: ExpenseResult<()> = (|| {
        let mut writer = BufWriter::new(
            File::create(&staging).map_err(|e| storage_error("create", &staging, e))?,
        );
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_error("serialize into", &staging, e))?;
        writer
            .flush()
            .map_err(|e| storage_error("write", &staging, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| storage_error("sync", &staging, e))?;
        fs::rename(&staging, path).map_err(|e| storage_error("replace", path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result?;

    tracing::debug!(path = %path.display(), "Saved JSON document");
    Ok(())
}
