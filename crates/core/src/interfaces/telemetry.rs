//! Telemetry interface
//!
//! The backend that ships these events anywhere is the host's concern;
//! sinks must be cheap and non-blocking since they are called inline.

use serde::{Deserialize, Serialize};

/// Which step of the resolution chain produced the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionSource {
    /// The in-memory cached selection
    Cached,
    /// The persisted selection, revalidated
    Persisted,
    /// The discovery service's active interpreter
    Active,
    /// The configured default, used after a cancelled lookup or when
    /// nothing else was found
    ConfiguredDefault,
    /// An explicit user choice (picker or direct path)
    Manual,
}

/// Events the selector reports about its own behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SelectionTelemetry {
    Resolved { source: ResolutionSource },
    LookupCancelled,
    DependenciesInstalled { count: usize },
    SelectionCleared,
    ResolutionFailed { reason: String },
}

/// Trait for the host's telemetry sink. Fire-and-forget.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, event: &SelectionTelemetry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_serialization_is_tagged() {
        let event = SelectionTelemetry::Resolved {
            source: ResolutionSource::Persisted,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"resolved\""));
        assert!(json.contains("\"source\":\"persisted\""));
    }
}
