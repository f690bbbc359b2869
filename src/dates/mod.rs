//! Candidate date derivation and comparison.

pub mod closeness;
pub mod path;

pub use closeness::{are_close, CLOSENESS_WINDOW_HOURS};
pub use path::path_date;
