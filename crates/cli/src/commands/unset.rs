use anyhow::{Context, Result};
use kernel_runner_core::interfaces::SelectionStore;
use kernel_runner_core::services::JsonSelectionStore;
use kernel_runner_core::KernelConfig;
use tracing::info;

use super::workspace_dir;

pub async fn unset_command(workspace_arg: Option<&str>, all: bool) -> Result<()> {
    let workspace = workspace_dir(workspace_arg)?;
    let config = KernelConfig::load_or_default(&workspace)?;
    let selection_file = config.selection_file_for(&workspace);

    let store = JsonSelectionStore::new(&selection_file);
    store
        .clear(&workspace)
        .await
        .context("Failed to clear the persisted selection")?;
    info!(workspace = %workspace.display(), "cleared persisted selection");

    if all && selection_file.exists() {
        std::fs::remove_file(&selection_file)
            .with_context(|| format!("Failed to remove {}", selection_file.display()))?;
        println!("Removed {}", selection_file.display());
    }

    println!("Selection cleared");
    Ok(())
}
