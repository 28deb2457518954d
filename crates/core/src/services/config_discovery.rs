use crate::error::Result;
use crate::interfaces::InterpreterDiscovery;
use crate::types::{InterpreterSource, PythonInterpreter};
use async_trait::async_trait;
use std::path::Path;

/// [`InterpreterDiscovery`] backed by a static candidate list.
///
/// The editor host already knows which interpreters exist; it hands the
/// list over (here: from `.kernel-runner.json`). The active interpreter is
/// the first workspace-sourced candidate, falling back to the first entry.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiscovery {
    candidates: Vec<PythonInterpreter>,
}

impl ConfigDiscovery {
    pub fn new(candidates: Vec<PythonInterpreter>) -> Self {
        Self { candidates }
    }
}

#[async_trait]
impl InterpreterDiscovery for ConfigDiscovery {
    async fn active_interpreter(&self, _workspace: &Path) -> Result<Option<PythonInterpreter>> {
        let workspace_scoped = self
            .candidates
            .iter()
            .find(|c| c.source == InterpreterSource::Workspace);
        Ok(workspace_scoped.or(self.candidates.first()).cloned())
    }

    async fn list_interpreters(&self, _workspace: &Path) -> Result<Vec<PythonInterpreter>> {
        Ok(self.candidates.clone())
    }

    async fn interpreter_at(&self, path: &Path) -> Result<Option<PythonInterpreter>> {
        Ok(self.candidates.iter().find(|c| c.path == path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidates() -> Vec<PythonInterpreter> {
        vec![
            PythonInterpreter::new("/usr/bin/python3").with_source(InterpreterSource::Global),
            PythonInterpreter::new("/work/.venv/bin/python")
                .with_source(InterpreterSource::Workspace),
        ]
    }

    #[tokio::test]
    async fn test_active_prefers_workspace_source() {
        let discovery = ConfigDiscovery::new(candidates());
        let active = discovery
            .active_interpreter(Path::new("/work"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.path, PathBuf::from("/work/.venv/bin/python"));
    }

    #[tokio::test]
    async fn test_active_falls_back_to_first_candidate() {
        let discovery = ConfigDiscovery::new(vec![
            PythonInterpreter::new("/usr/bin/python3").with_source(InterpreterSource::Global),
        ]);
        let active = discovery
            .active_interpreter(Path::new("/work"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.path, PathBuf::from("/usr/bin/python3"));
    }

    #[tokio::test]
    async fn test_empty_candidate_list_has_no_active() {
        let discovery = ConfigDiscovery::default();
        assert!(
            discovery
                .active_interpreter(Path::new("/work"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_interpreter_at_matches_by_path() {
        let discovery = ConfigDiscovery::new(candidates());
        assert!(
            discovery
                .interpreter_at(Path::new("/usr/bin/python3"))
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            discovery
                .interpreter_at(Path::new("/nonexistent/python"))
                .await
                .unwrap()
                .is_none()
        );
    }
}
