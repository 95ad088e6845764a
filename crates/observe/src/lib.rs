//! Logging initialization shared by the binaries of this workspace: the
//! tracing subscriber setup and a panic hook that reports through it.
pub mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
