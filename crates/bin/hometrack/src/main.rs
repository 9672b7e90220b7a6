//! # hometrack — device tracking demo
//!
//! Composition root that wires the adapters together and runs the demo.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Run the demo scenario and write its steps to stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod demo;
mod wiring;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::demo::Reporter;
use crate::wiring::Services;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(output = %config.demo.output, "starting demo");

    let services = Services::in_memory();
    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(config.demo.output, stdout.lock());
    let summary = demo::run(&services, &mut reporter).await?;

    tracing::info!(?summary, "demo complete");
    Ok(())
}
