//! Integration-test umbrella for the kernel-runner workspace.

pub use kernel_runner_core::*;
