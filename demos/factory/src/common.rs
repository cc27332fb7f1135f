//! Plumbing shared by both binaries.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mf_core::TargetPair;
use mf_sim::{Factory, FactoryBuilder, FactoryObserver};

/// Default instruction file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "./input.txt";

/// Install a stderr subscriber; `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load `input`, run it to quiescence, and hand back the finished factory.
pub fn run_factory(
    input:    &Path,
    target:   Option<TargetPair>,
    observer: &mut impl FactoryObserver,
) -> Result<Factory> {
    let layout = mf_instructions::load_layout_path(input)
        .with_context(|| format!("failed to read instructions from {}", input.display()))?;
    info!(bots = layout.bots.len(), path = %input.display(), "instructions loaded");

    let mut builder = FactoryBuilder::new(layout);
    if let Some(pair) = target {
        builder = builder.target(pair);
    }
    let mut factory = builder.build()?;
    factory.run(observer)?;
    Ok(factory)
}
