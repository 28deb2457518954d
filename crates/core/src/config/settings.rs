use crate::error::{Error, Result};
use crate::types::{KernelDependency, PythonInterpreter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace configuration for the selection engine.
///
/// Lives in a `.kernel-runner.json` next to (or above) the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KernelConfig {
    /// Fallback interpreter used when the lookup is cancelled or finds
    /// nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_interpreter: Option<PathBuf>,

    /// Packages the kernel backend needs before it can start.
    #[serde(default = "default_dependencies")]
    pub required_dependencies: Vec<KernelDependency>,

    /// Whether missing dependencies may be installed via the installer
    /// collaborator. When false, missing packages fail resolution.
    #[serde(default = "default_install_missing")]
    pub install_missing: bool,

    /// Where the persisted selection lives. Defaults to
    /// `.kernel-runner-selection.json` in the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_file: Option<PathBuf>,

    /// Interpreters the host already knows about, used by the bundled
    /// static discovery service.
    #[serde(default)]
    pub interpreters: Vec<PythonInterpreter>,
}

fn default_dependencies() -> Vec<KernelDependency> {
    vec![KernelDependency::new("ipykernel")]
}

fn default_install_missing() -> bool {
    true
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_interpreter: None,
            required_dependencies: default_dependencies(),
            install_missing: default_install_missing(),
            selection_file: None,
            interpreters: Vec::new(),
        }
    }
}

impl KernelConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the nearest config for a workspace, falling back to defaults.
    pub fn load_or_default(workspace: &Path) -> Result<Self> {
        match Self::find_config_file(workspace) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".kernel-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("kernel-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Path of the selection store file for a workspace.
    pub fn selection_file_for(&self, workspace: &Path) -> PathBuf {
        match &self.selection_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => workspace.join(path),
            None => workspace.join(".kernel-runner-selection.json"),
        }
    }
}
