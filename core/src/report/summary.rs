use serde::{Deserialize, Serialize};

use crate::prelude::{StatError, StatResult};

/// Per-channel summary row emitted by the analysis workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub timestamp: f64,
    pub channel: usize,
    pub rms: f64,
    pub peak: f64,
    pub sample_count: usize,
}

impl SummaryRecord {
    pub fn new(timestamp: f64, channel: usize, rms: f64, peak: f64, sample_count: usize) -> Self {
        Self {
            timestamp,
            channel,
            rms,
            peak,
            sample_count,
        }
    }
}

/// Aggregated output of one workflow execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub overall_rms: f64,
    pub channel_rms: Vec<f64>,
    pub records: Vec<SummaryRecord>,
    pub notes: Vec<String>,
}

impl RunReport {
    pub fn to_json(&self) -> StatResult<String> {
        serde_json::to_string(self).map_err(|err| StatError::Internal(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let report = RunReport {
            overall_rms: 0.5,
            channel_rms: vec![0.25, 0.75],
            records: vec![SummaryRecord::new(1.0, 0, 0.25, 0.5, 128)],
            notes: vec!["axis reduction shape [4]".to_string()],
        };
        let encoded = report.to_json().unwrap();
        let decoded: RunReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.channel_rms, report.channel_rms);
        assert_eq!(decoded.records[0].sample_count, 128);
        assert_eq!(decoded.notes, report.notes);
    }
}
