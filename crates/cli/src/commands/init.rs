use anyhow::{bail, Context, Result};
use kernel_runner_core::KernelConfig;
use std::path::PathBuf;

use super::workspace_dir;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let workspace = workspace_dir(cwd)?;
    let config_path: PathBuf = workspace.join(".kernel-runner.json");

    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    KernelConfig::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {}", config_path.display());
    println!("Add your interpreters to the \"interpreters\" list to enable resolution.");
    Ok(())
}
