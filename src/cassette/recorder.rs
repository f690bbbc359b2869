//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Records interactions and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            interactions: Vec::new(),
            next_seq: 0,
        }
    }

    /// Record an interaction. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let interaction = Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        };
        self.next_seq += 1;
        self.interactions.push(interaction);
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
