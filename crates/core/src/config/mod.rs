//! Configuration loading and persistence

pub mod settings;

pub use settings::KernelConfig;
