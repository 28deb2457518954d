use anyhow::Result;
use clap::Parser;
use kernel_runner::KernelRunner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = KernelRunner::parse();
    cli.command.execute().await
}
