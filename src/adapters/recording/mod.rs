//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod shell;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use filesystem::RecordingFileSystem;
pub use shell::RecordingShellExecutor;

/// Record a `Result<T, E>` interaction using the ok/err JSON convention.
///
/// Mirror of `cassette::replayer::replay_result`:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json =
        serde_json::to_value(input).expect("failed to serialize recording input");

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize ok value");
            serde_json::json!({ "ok": inner })
        }
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
