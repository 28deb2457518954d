//! Selection persistence interface

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Trait for persisting the chosen interpreter path per workspace.
///
/// Implementations decide where the data lives (editor memento, JSON file,
/// settings service); the selector only needs load/save/clear.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// The interpreter path previously persisted for this workspace.
    async fn load(&self, workspace: &Path) -> Result<Option<PathBuf>>;

    /// Persist a new interpreter path for this workspace.
    async fn save(&self, workspace: &Path, interpreter: &Path) -> Result<()>;

    /// Forget the persisted path for this workspace.
    async fn clear(&self, workspace: &Path) -> Result<()>;
}
