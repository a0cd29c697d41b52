use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub channels: usize,
    pub samples_per_channel: usize,
    #[serde(default)]
    pub axis: Option<usize>,
    #[serde(default)]
    pub keep_dims: bool,
    #[serde(default)]
    pub ignore_nans: bool,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        channels: usize,
        samples_per_channel: usize,
        axis: Option<usize>,
        keep_dims: bool,
    ) -> Self {
        Self {
            channels,
            samples_per_channel,
            axis,
            keep_dims,
            ignore_nans: false,
        }
    }
}
