//! Interpreter discovery interface
//!
//! Discovery mechanics (registry scans, PATH probing, conda/venv walks)
//! belong to the host; the selector only needs these three lookups.

use crate::error::Result;
use crate::types::PythonInterpreter;
use async_trait::async_trait;
use std::path::Path;

/// Trait for the host's interpreter discovery service.
#[async_trait]
pub trait InterpreterDiscovery: Send + Sync {
    /// The interpreter the host considers active for the workspace,
    /// if there is one. May be slow; the selector races it against a
    /// cancellation token.
    async fn active_interpreter(&self, workspace: &Path) -> Result<Option<PythonInterpreter>>;

    /// All interpreters known for the workspace, for the picker.
    async fn list_interpreters(&self, workspace: &Path) -> Result<Vec<PythonInterpreter>>;

    /// Look up (and revalidate) the interpreter at a specific path.
    /// Returns `None` when the path no longer points at a usable interpreter.
    async fn interpreter_at(&self, path: &Path) -> Result<Option<PythonInterpreter>>;
}
