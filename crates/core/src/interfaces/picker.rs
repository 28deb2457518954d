//! Interpreter picker interface
//!
//! The actual picker UI (quick-pick list, modal, whatever the host renders)
//! is out of scope here.

use crate::error::Result;
use crate::types::PythonInterpreter;
use async_trait::async_trait;

/// Trait for asking the user to choose among candidate interpreters.
#[async_trait]
pub trait InterpreterPicker: Send + Sync {
    /// Present the candidates and return the chosen one.
    /// `None` means the user dismissed the picker.
    async fn pick(&self, candidates: &[PythonInterpreter]) -> Result<Option<PythonInterpreter>>;
}
