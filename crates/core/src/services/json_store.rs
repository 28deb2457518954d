use crate::error::{Error, Result};
use crate::interfaces::SelectionStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File-backed [`SelectionStore`].
///
/// Persists a workspace → interpreter-path map as pretty-printed JSON,
/// one file per host. Reads and writes go through `std::fs`; the payload
/// is a handful of paths, so blocking here is fine.
#[derive(Debug, Clone)]
pub struct JsonSelectionStore {
    path: PathBuf,
}

impl JsonSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<BTreeMap<String, PathBuf>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Storage(format!("Failed to parse selection file: {e}")))
    }

    fn write_map(&self, map: &BTreeMap<String, PathBuf>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(map)
            .map_err(|e| Error::Storage(format!("Failed to serialize selection file: {e}")))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn key(workspace: &Path) -> String {
        workspace.display().to_string()
    }
}

#[async_trait]
impl SelectionStore for JsonSelectionStore {
    async fn load(&self, workspace: &Path) -> Result<Option<PathBuf>> {
        Ok(self.read_map()?.remove(&Self::key(workspace)))
    }

    async fn save(&self, workspace: &Path, interpreter: &Path) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(Self::key(workspace), interpreter.to_path_buf());
        self.write_map(&map)
    }

    async fn clear(&self, workspace: &Path) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(&Self::key(workspace)).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
