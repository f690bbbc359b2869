//! Replaying adapters that replay recorded interactions.

pub mod filesystem;
pub mod shell;

pub use filesystem::ReplayingFileSystem;
pub use shell::ReplayingShellExecutor;
