//! JSON snapshot storage
//!
//! The ledger core does not persist; this adapter mirrors its full-reload
//! seam: load a [`LedgerSnapshot`] from disk (or a default when no file
//! exists yet) and save one back atomically. Durability guarantees beyond
//! the atomic rename are out of scope.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::store::LedgerSnapshot;

/// Handle on the JSON file holding the whole ledger state
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or an empty default when the file does not exist
    pub fn load(&self) -> LedgerResult<LedgerSnapshot> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no ledger file yet, starting empty");
            return Ok(LedgerSnapshot::default());
        }

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Save the snapshot atomically (write to a temp file, then rename)
    pub fn save(&self, snapshot: &LedgerSnapshot) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let file = File::create(&tmp_path).map_err(|e| {
                LedgerError::Storage(format!("Failed to create {}: {}", tmp_path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, snapshot).map_err(|e| {
                LedgerError::Storage(format!("Failed to serialize ledger: {}", e))
            })?;
            writer.flush().map_err(|e| {
                LedgerError::Storage(format!("Failed to write {}: {}", tmp_path.display(), e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to move {} into place: {}",
                tmp_path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }
}
