use anyhow::bail;
use clap::Parser;
use pricekit::FORK_COUNT_LIMIT;

/// Runtime configuration for the `pricekit-probe` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pricekit-probe",
    version,
    about = "Resolves this host's claim address and previews how a batch would be sharded"
)]
pub struct CliArgs {
    /// Maximum number of work items handed to one forked task.
    ///
    /// Environment variable: `FORK_COUNT_LIMIT`
    #[arg(long, env = "FORK_COUNT_LIMIT", default_value_t = FORK_COUNT_LIMIT)]
    pub fork_count_limit: usize,

    /// Size of the synthetic batch to shard. Zero skips the shard plan.
    ///
    /// Environment variable: `WORK_ITEMS`
    #[arg(long, env = "WORK_ITEMS", default_value_t = 0)]
    pub work_items: usize,

    /// Split the batch into a head of `FORK_COUNT_LIMIT` items and a tail,
    /// instead of equal-sized chunks.
    ///
    /// Environment variable: `SPLIT_TWO`
    #[arg(long, env = "SPLIT_TWO", default_value_t = false)]
    pub split_two: bool,

    /// Do not resolve the claim address.
    #[arg(long, default_value_t = false)]
    pub skip_address: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    Chunks,
    Two,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub fork_count_limit: usize,
    pub work_items: usize,
    pub plan_mode: PlanMode,
    pub resolve_address: bool,
}

impl TryFrom<CliArgs> for ProbeConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.fork_count_limit == 0 {
            bail!("FORK_COUNT_LIMIT must be greater than 0");
        }

        Ok(Self {
            fork_count_limit: args.fork_count_limit,
            work_items: args.work_items,
            plan_mode: if args.split_two {
                PlanMode::Two
            } else {
                PlanMode::Chunks
            },
            resolve_address: !args.skip_address,
        })
    }
}
