use crate::error::Result;
use crate::interfaces::InterpreterPicker;
use crate::types::PythonInterpreter;
use async_trait::async_trait;

/// Non-interactive [`InterpreterPicker`] that takes the first candidate.
///
/// For headless hosts and the CLI's non-interactive select path. The
/// candidate list arrives in discovery order, so "first" is the host's
/// preferred entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPicker;

#[async_trait]
impl InterpreterPicker for AutoPicker {
    async fn pick(&self, candidates: &[PythonInterpreter]) -> Result<Option<PythonInterpreter>> {
        Ok(candidates.first().cloned())
    }
}
