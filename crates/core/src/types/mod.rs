//! Core types shared across the selection engine

pub mod dependency;
pub mod interpreter;
pub mod version;

pub use dependency::{InstallOutcome, KernelDependency};
pub use interpreter::{InterpreterSource, PythonInterpreter};
pub use version::PythonVersion;
