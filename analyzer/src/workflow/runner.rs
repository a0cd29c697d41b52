use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use statcore::math::rms::{nan_rms, rms, rms_slice, scalar};
use statcore::report::{DatasetPayload, RunReport, SummaryRecord};
use statcore::telemetry::{MetricsRecorder, RunLog};

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, payload: &DatasetPayload) -> anyhow::Result<RunReport> {
        let logger = RunLog::new("runner");
        let metrics = MetricsRecorder::new();

        let matrix = payload.to_matrix().context("shaping dataset payload")?;

        let overall = rms(&matrix, None, false).context("reducing full dataset")?;
        metrics.record_reduction();
        let overall_rms = scalar(&overall).unwrap_or(f64::NAN);

        let timestamp = payload.ancillary.timestamp;
        let mut channel_rms = Vec::with_capacity(matrix.nrows());
        let mut records = Vec::with_capacity(matrix.nrows());
        for (channel, row) in matrix.outer_iter().enumerate() {
            let samples = row.to_vec();
            let value = rms_slice(&samples);
            let peak = samples.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
            metrics.record_reduction();
            channel_rms.push(value);
            records.push(SummaryRecord::new(
                timestamp,
                channel,
                value,
                peak,
                samples.len(),
            ));
        }

        let mut notes = Vec::new();
        if let Some(axis) = self.config.axis {
            let reduced = if self.config.ignore_nans {
                nan_rms(&matrix, Some(axis), self.config.keep_dims)
            } else {
                rms(&matrix, Some(axis), self.config.keep_dims)
            };
            match reduced {
                Ok(reduced) => {
                    metrics.record_reduction();
                    notes.push(format!("axis {} reduction shape {:?}", axis, reduced.shape()));
                }
                Err(err) => {
                    metrics.record_failure();
                    logger.record_warning(&format!("configured reduction failed: {}", err));
                    return Err(err).context("running configured axis reduction");
                }
            }
        }

        let snapshot = metrics.snapshot();
        notes.push(format!(
            "reductions {} failures {}",
            snapshot.reductions, snapshot.failures
        ));
        logger.record(&format!("Runner overall RMS {:.4}", overall_rms));

        Ok(RunReport {
            overall_rms,
            channel_rms,
            records,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_dataset_payload;

    #[test]
    fn runner_executes_workflow() {
        let cfg = WorkflowConfig::from_args(4, 256, Some(1), false);
        let runner = Runner::new(cfg.clone());
        let payload = build_dataset_payload(cfg.channels, cfg.samples_per_channel).unwrap();
        let report = runner.execute(&payload).unwrap();
        assert_eq!(report.channel_rms.len(), cfg.channels);
        assert_eq!(report.records.len(), cfg.channels);
        assert!(report.overall_rms > 0.0);
        assert!(report.notes[0].starts_with("axis 1 reduction"));
    }

    #[test]
    fn runner_rejects_configured_axis_beyond_rank() {
        let cfg = WorkflowConfig::from_args(4, 256, Some(5), false);
        let runner = Runner::new(cfg.clone());
        let payload = build_dataset_payload(cfg.channels, cfg.samples_per_channel).unwrap();
        assert!(runner.execute(&payload).is_err());
    }

    #[test]
    fn channel_rms_matches_direct_reduction() {
        let cfg = WorkflowConfig::from_args(2, 128, None, false);
        let runner = Runner::new(cfg.clone());
        let payload = build_dataset_payload(cfg.channels, cfg.samples_per_channel).unwrap();
        let report = runner.execute(&payload).unwrap();

        let matrix = payload.to_matrix().unwrap();
        let direct = rms(&matrix, Some(1), false).unwrap();
        for (computed, wanted) in report.channel_rms.iter().zip(direct.iter()) {
            assert!((computed - wanted).abs() < 1e-12);
        }
        let encoded = report.to_json().unwrap();
        let decoded: RunReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.channel_rms, report.channel_rms);
    }
}
