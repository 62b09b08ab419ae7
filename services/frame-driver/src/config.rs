//! Driver configuration loading.

use anyhow::Context;
use contour_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything the driver needs to run a batch of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Grid geometry and contouring options.
    pub engine: EngineConfig,
    /// Number of frames to compute.
    pub frames: u64,
    /// Time of the first frame.
    pub start_time: f64,
    /// Time advanced between frames.
    pub time_step: f64,
    /// Noise permutation seed; the reference permutation when unset.
    pub seed: Option<u64>,
    /// JSON-lines output file; frames are only summarised when unset.
    pub output: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            frames: 60,
            start_time: 0.0,
            time_step: 1.0 / 60.0,
            seed: None,
            output: None,
        }
    }
}

impl DriverConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: DriverConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.frames == 0 {
            anyhow::bail!("frames must be > 0");
        }
        if !self.start_time.is_finite() {
            anyhow::bail!("start_time must be finite");
        }
        if !self.time_step.is_finite() {
            anyhow::bail!("time_step must be finite");
        }
        self.engine.validate()?;
        Ok(())
    }

    /// Time of frame `index`.
    pub fn frame_time(&self, index: u64) -> f64 {
        self.start_time + index as f64 * self.time_step
    }
}
