use crate::interfaces::{SelectionTelemetry, TelemetrySink};
use tracing::{debug, info, warn};

/// [`TelemetrySink`] that forwards events to `tracing`.
///
/// Useful for hosts without a telemetry pipeline and for debugging with
/// `RUST_LOG=kernel_runner_core=debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTelemetry;

impl TelemetrySink for LoggingTelemetry {
    fn record(&self, event: &SelectionTelemetry) {
        match event {
            SelectionTelemetry::Resolved { source } => {
                debug!(?source, "interpreter resolved");
            }
            SelectionTelemetry::LookupCancelled => {
                info!("interpreter lookup cancelled");
            }
            SelectionTelemetry::DependenciesInstalled { count } => {
                info!(count, "kernel dependencies installed");
            }
            SelectionTelemetry::SelectionCleared => {
                debug!("interpreter selection cleared");
            }
            SelectionTelemetry::ResolutionFailed { reason } => {
                warn!(%reason, "interpreter resolution failed");
            }
        }
    }
}
