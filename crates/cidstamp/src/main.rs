use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::App;
use crate::config::Config;

mod cli;
mod config;
mod ui;

fn main() -> Result<()> {
    let app = App::parse();
    let config = Config::load(app.config.as_deref())?;

    // stdout carries results; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    app.run(&config)
}
