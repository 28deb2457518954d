//! Collaborator interfaces
//!
//! The selection engine mediates between external services the host
//! provides: interpreter discovery, dependency installation, persistence,
//! the picker UI and telemetry. Each is a narrow trait so hosts can plug in
//! their own implementations and tests can script them.

pub mod discovery;
pub mod installer;
pub mod picker;
pub mod store;
pub mod telemetry;

pub use discovery::InterpreterDiscovery;
pub use installer::DependencyInstaller;
pub use picker::InterpreterPicker;
pub use store::SelectionStore;
pub use telemetry::{ResolutionSource, SelectionTelemetry, TelemetrySink};
