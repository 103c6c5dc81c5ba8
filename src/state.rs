use crate::error::MonitorError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Single-line text file holding the hash seen by the previous run.
#[derive(Debug, Clone)]
pub struct HashStore {
    path: PathBuf,
}

impl HashStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the file does not exist yet, i.e. this is the first run.
    pub async fn load(&self) -> Result<Option<String>, MonitorError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let hash = content.trim().to_string();
                debug!("Previous hash {:?} from {}", hash, self.path.display());
                Ok(Some(hash))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.error(source)),
        }
    }

    pub async fn save(&self, hash: &str) -> Result<(), MonitorError> {
        fs::write(&self.path, hash)
            .await
            .map_err(|source| self.error(source))?;
        debug!("Saved hash {} to {}", hash, self.path.display());
        Ok(())
    }

    fn error(&self, source: std::io::Error) -> MonitorError {
        MonitorError::State {
            path: self.path.clone(),
            source,
        }
    }
}
