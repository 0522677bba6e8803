use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

use super::{QuizRecord, RecordRepository};

/// Loads quiz records from a YAML file containing a top-level record list.
pub struct FileRecordRepository {
    path: PathBuf,
    cache: OnceCell<Vec<QuizRecord>>,
}

impl FileRecordRepository {
    /// Create a repository reading from the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }
}

impl RecordRepository for FileRecordRepository {
    fn load_records(&self) -> Result<Vec<QuizRecord>> {
        let records = self.cache.get_or_try_init(|| {
            let raw = fs::read_to_string(&self.path)
                .with_context(|| format!("failed to read quiz file at {}", self.path.display()))?;
            let records: Vec<QuizRecord> = serde_yaml::from_str(&raw).with_context(|| {
                format!("invalid YAML structure in quiz file at {}", self.path.display())
            })?;
            debug!(records = records.len(), path = %self.path.display(), "loaded quiz records");
            Ok::<_, anyhow::Error>(records)
        })?;
        Ok(records.clone())
    }
}
