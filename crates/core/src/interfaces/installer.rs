//! Dependency installer interface
//!
//! Install mechanics (pip/conda invocation, progress UI, consent prompts)
//! belong to the host.

use crate::error::Result;
use crate::types::{InstallOutcome, KernelDependency, PythonInterpreter};
use async_trait::async_trait;

/// Trait for the host's dependency checker/installer.
#[async_trait]
pub trait DependencyInstaller: Send + Sync {
    /// Which of `required` are not importable in the given interpreter.
    async fn missing_dependencies(
        &self,
        interpreter: &PythonInterpreter,
        required: &[KernelDependency],
    ) -> Result<Vec<KernelDependency>>;

    /// Install the given packages into the interpreter's environment.
    /// A declined consent prompt is a normal outcome, not an error.
    async fn install(
        &self,
        interpreter: &PythonInterpreter,
        dependencies: &[KernelDependency],
    ) -> Result<InstallOutcome>;
}
