//! Console logging for the probe.
//!
//! Output is filtered with `RUST_LOG` (default `info`). Set
//! `RUST_LOG=pricekit=debug` to see the interface enumeration performed while
//! resolving the claim address.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true)
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}
