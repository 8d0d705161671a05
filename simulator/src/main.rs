use anyhow::Context;
use bridge::FeedBridge;
use chrono::Utc;
use clap::Parser;
use firecore::markers::BatchStats;
use generator::batch::build_detection_batch;
use scenario::ScenarioConfig;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod bridge;
mod generator;
mod scenario;

#[derive(Parser)]
#[command(author, version, about = "Mock backend driver for the wildfire dashboard")]
struct Args {
    /// Generate a single synthetic batch and emit a baseline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a scenario config from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    #[arg(long, default_value_t = 60)]
    detections: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 9000)]
    port: u16,
    /// Keep the HTTP bridge alive for dashboard polling
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_config = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else {
        ScenarioConfig::from_args(args.detections, args.seed)
    };

    if args.offline {
        let now = Utc::now();
        let batch = build_detection_batch(&scenario_config, scenario_config.seed, now)?;
        let stats = BatchStats::from_records(&batch, now);

        println!(
            "Offline batch -> total {}, high confidence {}, last 24h {}",
            stats.total, stats.high_confidence, stats.last_24h
        );

        let report = format!(
            "total={} high_confidence={} last_24h={} seed={}\n",
            stats.total, stats.high_confidence, stats.last_24h, scenario_config.seed
        );
        let report_path = PathBuf::from("tools/data/offline_feed.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }

    if args.serve {
        let bridge = FeedBridge::new(scenario_config, args.port);
        println!(
            "Feed bridge on 127.0.0.1:{} (Ctrl+C to stop)...",
            args.port
        );
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
        log::info!("shutting down after serving {} records", bridge.last_batch().len());
    }

    Ok(())
}
