//! Replays recorded interactions from a cassette.

use std::collections::HashMap;
use std::path::Path;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions (in order).
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    /// Per port+method cursor tracking position.
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Read a cassette YAML file and create a replayer for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, printing a clear error showing what was
    /// requested versus what interactions remain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = PortMethodKey {
            port: port.to_string(),
            method: method.to_string(),
        };

        let queue = self.queues.get(&key).unwrap_or_else(|| {
            let available: Vec<String> = self
                .queues
                .keys()
                .map(|k| format!("{}::{}", k.port, k.method))
                .collect();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        });

        let cursor = self.cursors.get_mut(&key).expect("cursor must exist");
        assert!(
            *cursor < queue.len(),
            "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
             have been consumed. Last interaction was seq={last_seq}.",
            count = queue.len(),
            last_seq = queue.last().map_or(0, |i| i.seq),
        );

        let interaction = &queue[*cursor];
        *cursor += 1;
        interaction
    }
}

/// Extracts a `Result` from a cassette output value.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
