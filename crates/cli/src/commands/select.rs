use anyhow::{Context, Result};
use kernel_runner_core::CancellationToken;
use std::path::Path;
use tracing::debug;

use super::{build_selector, workspace_dir};

pub async fn select_command(workspace_arg: Option<&str>, path: Option<&str>) -> Result<()> {
    let workspace = workspace_dir(workspace_arg)?;
    let selector = build_selector(&workspace)?;

    let selected = match path {
        Some(path) => {
            debug!(path, "selecting interpreter by path");
            Some(
                selector
                    .use_interpreter(&workspace, Path::new(path))
                    .await
                    .with_context(|| format!("Failed to select interpreter at {path}"))?,
            )
        }
        None => selector
            .select_interpreter(&workspace, &CancellationToken::new())
            .await
            .context("Failed to select an interpreter")?,
    };

    match selected {
        Some(interpreter) => println!("Selected: {}", interpreter.label()),
        None => println!("Selection unchanged"),
    }

    Ok(())
}
