use anyhow::{Context, Result};
use kernel_runner_core::CancellationToken;
use std::time::Duration;
use tracing::debug;

use super::{build_selector, workspace_dir};

pub async fn resolve_command(
    workspace_arg: Option<&str>,
    json: bool,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let workspace = workspace_dir(workspace_arg)?;
    debug!(workspace = %workspace.display(), "resolving interpreter");

    let selector = build_selector(&workspace)?;
    let token = CancellationToken::new();

    if let Some(ms) = timeout_ms {
        let deadline = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            deadline.cancel();
        });
    }

    let interpreter = selector
        .resolve(&workspace, &token)
        .await
        .context("Failed to resolve an interpreter for the kernel backend")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&interpreter)?);
    } else {
        println!("{}", interpreter.path.display());
        if let Some(version) = &interpreter.version {
            println!("Version: {version}");
        }
    }

    Ok(())
}
