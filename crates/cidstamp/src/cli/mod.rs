use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

mod extract;
mod inspect;
mod serve;
mod verify;

#[derive(Debug, Parser)]
#[command(name = "cidstamp", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Config file [default: $XDG_CONFIG_HOME/cidstamp/config.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "i", name = "inspect", about = "Show the content identifier of files and stamped archives")]
    Inspect(inspect::InspectArg),
    #[command(alias = "x", name = "extract", about = "Save the payload of a stamped archive")]
    Extract(extract::ExtractArg),
    #[command(name = "verify", about = "Check a file or stamped archive against an expected identifier")]
    Verify(verify::VerifyArg),
    #[command(name = "serve", about = "Answer JSON-lines requests on stdin")]
    Serve(serve::ServeArg),
}

impl App {
    pub fn run(self, config: &Config) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self.cmd {
            Commands::Inspect(arg) => arg.run(config, &mut out),
            Commands::Extract(arg) => arg.run(config, &mut out),
            Commands::Verify(arg) => arg.run(config, &mut out),
            Commands::Serve(arg) => arg.run(config, std::io::stdin().lock(), &mut out),
        }
    }
}
