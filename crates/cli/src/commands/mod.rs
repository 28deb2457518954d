pub mod init;
pub mod resolve;
pub mod select;
pub mod status;
pub mod unset;

pub use init::init_command;
pub use resolve::resolve_command;
pub use select::select_command;
pub use status::status_command;
pub use unset::unset_command;

use anyhow::{Context, Result};
use kernel_runner_core::services::{
    AutoPicker, ConfigDiscovery, JsonSelectionStore, LoggingTelemetry, PreinstalledDependencies,
};
use kernel_runner_core::{KernelConfig, KernelSelector};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolve the workspace directory from an optional CLI argument.
pub(crate) fn workspace_dir(arg: Option<&str>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

/// Build a selector from the nearest workspace configuration, wired to the
/// bundled collaborator implementations.
pub(crate) fn build_selector(workspace: &Path) -> Result<KernelSelector> {
    let config = KernelConfig::load_or_default(workspace)
        .with_context(|| format!("Failed to load config for {}", workspace.display()))?;

    let store = JsonSelectionStore::new(config.selection_file_for(workspace));
    let discovery = ConfigDiscovery::new(config.interpreters.clone());

    Ok(KernelSelector::new(
        config,
        Arc::new(discovery),
        Arc::new(PreinstalledDependencies),
        Arc::new(store),
        Arc::new(AutoPicker),
        Arc::new(LoggingTelemetry),
    ))
}
