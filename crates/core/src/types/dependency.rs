use super::PythonVersion;
use serde::{Deserialize, Serialize};

/// A Python package the kernel backend needs before it can start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelDependency {
    pub package: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_version: Option<PythonVersion>,
}

impl KernelDependency {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            minimum_version: None,
        }
    }

    pub fn with_minimum_version(mut self, version: PythonVersion) -> Self {
        self.minimum_version = Some(version);
        self
    }
}

/// Result of asking the installer collaborator to install missing packages.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallOutcome {
    /// All requested packages were installed
    Installed,
    /// The user (or host policy) declined the installation
    Declined,
    /// Installation was attempted and failed
    Failed(String),
}
