//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the reconciliation core and the
//! outside world (the archive on disk, external programs). Implementations
//! live in `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::FileSystem;
pub use shell::{ShellExecutor, ShellOutput};
