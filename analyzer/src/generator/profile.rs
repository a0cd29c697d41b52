use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use statcore::report::{DatasetAncillary, DatasetKind, DatasetMetadata, DatasetPayload};
use std::f64::consts::PI;

/// Configuration for generating synthetic multi-channel data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub channels: usize,
    pub samples_per_channel: usize,
    pub frequency: f64,
    pub noise: f64,
    pub seed: u64,
    pub kind: DatasetKind,
    pub name: String,
    pub description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            channels: 8,
            samples_per_channel: 2048,
            frequency: 32.0,
            noise: 0.03,
            seed: 0,
            kind: DatasetKind::Synthetic,
            name: "baseline".to_string(),
            description: None,
        }
    }
}

impl GeneratorConfig {
    fn normalized_channels(&self) -> usize {
        self.channels.max(1)
    }

    fn normalized_samples(&self) -> usize {
        self.samples_per_channel.max(1)
    }
}

fn build_sample_block(config: &GeneratorConfig) -> anyhow::Result<Vec<f64>> {
    let channels = config.normalized_channels();
    let samples_per_channel = config.normalized_samples();
    let sample_count = channels
        .checked_mul(samples_per_channel)
        .context("overflow computing sample count for generator")?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(sample_count);

    for channel_index in 0..channels {
        let phase_offset = channel_index as f64 * 0.25;
        for sample_index in 0..samples_per_channel {
            let fraction = sample_index as f64 / samples_per_channel as f64;
            let base_phase = fraction * 2.0 * PI * config.frequency + phase_offset;
            let envelope = 0.2 + 0.8 * (1.0 - fraction);
            let jitter = if config.noise > 0.0 {
                rng.gen_range(-config.noise..config.noise)
            } else {
                0.0
            };
            samples.push(base_phase.sin() * envelope + jitter);
        }
    }

    Ok(samples)
}

pub fn build_dataset_payload_from_config(config: &GeneratorConfig) -> anyhow::Result<DatasetPayload> {
    let samples = build_sample_block(config)?;
    let ancillary = DatasetAncillary {
        timestamp: 0.0,
        kind: config.kind,
        channels: config.normalized_channels(),
        samples_per_channel: config.normalized_samples(),
        metadata: Some(DatasetMetadata {
            name: config.name.clone(),
            units: "V".to_string(),
            sample_rate_hz: 1000.0,
            description: config.description.clone(),
            timestamp_start: None,
        }),
    };

    Ok(DatasetPayload::new(samples, ancillary))
}

pub fn build_dataset_payload(channels: usize, samples_per_channel: usize) -> anyhow::Result<DatasetPayload> {
    let config = GeneratorConfig {
        channels,
        samples_per_channel,
        ..Default::default()
    };
    build_dataset_payload_from_config(&config)
}
