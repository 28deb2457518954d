use crate::error::Result;
use crate::interfaces::DependencyInstaller;
use crate::types::{InstallOutcome, KernelDependency, PythonInterpreter};
use async_trait::async_trait;

/// [`DependencyInstaller`] for environments provisioned out of band.
///
/// Reports nothing missing and answers install requests with
/// [`InstallOutcome::Installed`]. Hosts that actually probe environments
/// and run pip/conda implement the trait themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreinstalledDependencies;

#[async_trait]
impl DependencyInstaller for PreinstalledDependencies {
    async fn missing_dependencies(
        &self,
        _interpreter: &PythonInterpreter,
        _required: &[KernelDependency],
    ) -> Result<Vec<KernelDependency>> {
        Ok(Vec::new())
    }

    async fn install(
        &self,
        _interpreter: &PythonInterpreter,
        _dependencies: &[KernelDependency],
    ) -> Result<InstallOutcome> {
        Ok(InstallOutcome::Installed)
    }
}
