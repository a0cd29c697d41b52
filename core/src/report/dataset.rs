use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::prelude::{StatError, StatResult};

/// Provenance of a sample block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatasetKind {
    Synthetic,
    Imported,
}

/// Describes where a dataset came from and how it was sampled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub name: String,
    pub units: String,
    pub sample_rate_hz: f64,
    pub description: Option<String>,
    pub timestamp_start: Option<f64>,
}

/// Ancillary metadata accompanying each sample block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetAncillary {
    pub timestamp: f64,
    pub kind: DatasetKind,
    pub channels: usize,
    pub samples_per_channel: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DatasetMetadata>,
}

/// Data payload consumed by the analysis workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPayload {
    pub samples: Vec<f64>,
    pub ancillary: DatasetAncillary,
}

impl DatasetPayload {
    pub fn new(samples: Vec<f64>, ancillary: DatasetAncillary) -> Self {
        Self { samples, ancillary }
    }

    /// Shapes the flat sample block into a channels-by-samples matrix.
    pub fn to_matrix(&self) -> StatResult<Array2<f64>> {
        let shape = (
            self.ancillary.channels,
            self.ancillary.samples_per_channel,
        );
        Array2::from_shape_vec(shape, self.samples.clone())
            .map_err(|err| StatError::InvalidInput(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ancillary(channels: usize, samples_per_channel: usize) -> DatasetAncillary {
        DatasetAncillary {
            timestamp: 0.0,
            kind: DatasetKind::Synthetic,
            channels,
            samples_per_channel,
            metadata: None,
        }
    }

    #[test]
    fn payload_shapes_into_matrix() {
        let payload = DatasetPayload::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], ancillary(2, 3));
        let matrix = payload.to_matrix().unwrap();
        assert_eq!(matrix.shape(), &[2, 3]);
        assert_eq!(matrix[[1, 2]], 6.0);
    }

    #[test]
    fn mismatched_sample_count_is_rejected() {
        let payload = DatasetPayload::new(vec![1.0, 2.0, 3.0], ancillary(2, 3));
        assert!(matches!(
            payload.to_matrix(),
            Err(StatError::InvalidInput(_))
        ));
    }
}
