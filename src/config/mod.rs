//! Path management
//!
//! Resolves where the ledger file lives. Resolution order:
//!
//! 1. `HOMELEDGER_DATA_DIR` environment variable (explicit override)
//! 2. The platform data directory (`~/.local/share/homeledger` on Linux,
//!    the equivalents on macOS/Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{LedgerError, LedgerResult};

/// Manages the paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Fails when no home directory can be determined.
    pub fn new() -> LedgerResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var("HOMELEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "homeledger")
                .ok_or_else(|| {
                    LedgerError::Storage("Could not determine a home directory".into())
                })?
                .data_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The JSON file holding the whole ledger
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }
}
