use anyhow::{Context, Result};
use kernel_runner_core::interfaces::SelectionStore;
use kernel_runner_core::services::JsonSelectionStore;
use kernel_runner_core::KernelConfig;

use super::workspace_dir;

pub async fn status_command(workspace_arg: Option<&str>, json: bool) -> Result<()> {
    let workspace = workspace_dir(workspace_arg)?;
    let config = KernelConfig::load_or_default(&workspace)
        .with_context(|| format!("Failed to load config for {}", workspace.display()))?;

    let store = JsonSelectionStore::new(config.selection_file_for(&workspace));
    let persisted = store.load(&workspace).await?;

    if json {
        let status = serde_json::json!({
            "workspace": workspace,
            "persisted": persisted,
            "defaultInterpreter": config.default_interpreter,
            "installMissing": config.install_missing,
            "requiredDependencies": config.required_dependencies,
            "candidates": config.interpreters,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Workspace: {}", workspace.display());
    match &persisted {
        Some(path) => println!("Persisted interpreter: {}", path.display()),
        None => println!("Persisted interpreter: (none)"),
    }
    match &config.default_interpreter {
        Some(path) => println!("Default interpreter: {}", path.display()),
        None => println!("Default interpreter: (none)"),
    }
    println!("Install missing dependencies: {}", config.install_missing);

    let packages: Vec<&str> = config
        .required_dependencies
        .iter()
        .map(|d| d.package.as_str())
        .collect();
    println!("Required dependencies: {}", packages.join(", "));
    println!("Configured candidates: {}", config.interpreters.len());

    Ok(())
}
