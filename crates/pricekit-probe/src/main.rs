mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, PlanMode, ProbeConfig};
use pricekit::{partition_into_chunks, partition_into_two, resolve_local_address};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ProbeConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    if config.resolve_address {
        let addr = resolve_local_address().context("failed to resolve claim address")?;
        tracing::info!(%addr, "claim address");
        println!("{addr}");
    }

    if config.work_items > 0 {
        log_shard_plan(&config)?;
    }

    Ok(())
}

fn log_startup_info(config: &ProbeConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting probe with full config: {:#?}", config);
    } else {
        tracing::info!(
            "Starting probe with fork count limit {}",
            config.fork_count_limit
        );
    }
}

fn log_shard_plan(config: &ProbeConfig) -> anyhow::Result<()> {
    let items: Vec<usize> = (0..config.work_items).collect();
    let limit = Some(config.fork_count_limit);

    match config.plan_mode {
        PlanMode::Chunks => {
            let chunks = partition_into_chunks(&items, limit)?;
            let sizes: Vec<usize> = chunks.iter().map(|chunk| chunk.len()).collect();
            tracing::info!(
                items = items.len(),
                chunks = chunks.len(),
                ?sizes,
                "shard plan"
            );
        }
        PlanMode::Two => {
            let (head, tail) = partition_into_two(&items, limit)?;
            tracing::info!(
                items = items.len(),
                head = head.len(),
                tail = tail.len(),
                "split plan"
            );
        }
    }
    Ok(())
}
