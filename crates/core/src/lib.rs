//! kernel-runner - selects the Python interpreter that backs a notebook kernel
//!
//! This crate provides functionality to:
//! - Resolve which installed interpreter should launch the kernel backend
//! - Check that the required kernel packages are present before launch
//! - Persist the choice so later sessions reuse it
//! - Notify observers when the choice changes
//!
//! Interpreter discovery, dependency installation, the picker UI and the
//! telemetry backend are external collaborators behind the traits in
//! [`interfaces`].
pub mod cancellation;
pub mod config;
pub mod error;
pub mod events;
pub mod interfaces;
pub mod selector;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use cancellation::CancellationToken;
pub use config::KernelConfig;
pub use events::SelectionEvent;
pub use interfaces::{
    DependencyInstaller, InterpreterDiscovery, InterpreterPicker, ResolutionSource,
    SelectionStore, SelectionTelemetry, TelemetrySink,
};
pub use selector::KernelSelector;
