use clap::Parser;
use generator::profile::build_dataset_payload;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing statistics workflow driver")]
struct Args {
    /// Run a single offline pass over a generated dataset and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 8)]
    channels: usize,
    #[arg(long, default_value_t = 1024)]
    samples_per_channel: usize,
    /// Axis to reduce over (omit to reduce the full dataset only)
    #[arg(long)]
    axis: Option<usize>,
    #[arg(long, default_value_t = false)]
    keep_dims: bool,
    /// Append the JSON run report to this file
    #[arg(long, default_value = "tools/data/offline_summary.log")]
    report: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.channels, args.samples_per_channel, args.axis, args.keep_dims)
    };

    let runner = Runner::new(workflow_config.clone());
    let payload = build_dataset_payload(
        workflow_config.channels,
        workflow_config.samples_per_channel,
    )?;

    if args.offline {
        let report = runner.execute(&payload)?;

        println!(
            "Offline run -> overall RMS {:.6}, channels {}, records {}",
            report.overall_rms,
            report.channel_rms.len(),
            report.records.len()
        );

        let line = format!("{}\n", report.to_json()?);
        if let Some(parent) = args.report.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&args.report)?;
        file.write_all(line.as_bytes())?;
    }

    Ok(())
}
