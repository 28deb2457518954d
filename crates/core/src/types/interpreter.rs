use super::PythonVersion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where an interpreter came from.
///
/// The discovery service classifies interpreters by the environment kind
/// they live in; the selector only uses this for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterpreterSource {
    /// Interpreter configured for the current workspace
    Workspace,
    /// Globally installed interpreter (system or user install)
    Global,
    /// Virtual environment (venv/virtualenv)
    Venv,
    /// Conda environment
    Conda,
    #[default]
    Unknown,
}

/// An installed Python interpreter as reported by the discovery service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PythonInterpreter {
    pub path: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<PythonVersion>,

    #[serde(default)]
    pub source: InterpreterSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PythonInterpreter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            version: None,
            source: InterpreterSource::Unknown,
            display_name: None,
        }
    }

    pub fn with_version(mut self, version: PythonVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_source(mut self, source: InterpreterSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Human-readable label for logs and picker entries.
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => self.path.display().to_string(),
        }
    }
}
