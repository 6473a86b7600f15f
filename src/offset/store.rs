//! Single-slot persistence for the offset document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{GhostError, Result};
use crate::offset::record::OffsetRecord;

/// Fixed filename of the single offset slot (no extension).
pub const OFFSET_FILE_NAME: &str = "FAKE_CONSTRAINT_COPY_OFFSET_JSON_FILE";

/// Directory under the user's data directory holding the slot.
const APP_DIR_NAME: &str = "ghost-constraint";

/// Reads and writes the one offset document.
///
/// The path is resolved once at construction and never consulted from the
/// environment again, so tests can point the store at a temporary directory.
/// Writing overwrites any prior document: a single slot, no versioning, no
/// history.
#[derive(Debug, Clone)]
pub struct OffsetStore {
    path: PathBuf,
}

impl OffsetStore {
    /// A store whose document lives in `dir` under [`OFFSET_FILE_NAME`].
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(OFFSET_FILE_NAME),
        }
    }

    /// A store in the user's per-application data directory.
    pub fn from_user_data_dir() -> Result<Self> {
        let data_dir = dirs::data_dir().ok_or(GhostError::DataDirUnavailable)?;
        Ok(Self::in_dir(data_dir.join(APP_DIR_NAME)))
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with `record`. I/O failures propagate.
    pub fn write(&self, record: &OffsetRecord) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        log::debug!("wrote offset document to {}", self.path.display());
        Ok(())
    }

    /// Read the slot.
    ///
    /// `Ok(None)` when no document has been written yet; that is not an
    /// error. A document that exists but fails to parse is, with no partial
    /// recovery.
    pub fn read(&self) -> Result<Option<OffsetRecord>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
