//! Default collaborator implementations
//!
//! One bundled implementation per interface, for hosts (and the CLI) that
//! do not bring their own. Real discovery/install/picker services live in
//! the host; these stay deliberately simple.

pub mod auto_picker;
pub mod config_discovery;
pub mod json_store;
pub mod logging_telemetry;
pub mod preinstalled;

pub use auto_picker::AutoPicker;
pub use config_discovery::ConfigDiscovery;
pub use json_store::JsonSelectionStore;
pub use logging_telemetry::LoggingTelemetry;
pub use preinstalled::PreinstalledDependencies;
