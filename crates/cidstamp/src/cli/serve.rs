//! JSON-lines request loop.
//!
//! One request per input line, one response per output line, answered in
//! order against a single [`Stamper`]:
//!
//! ```text
//! {"op":"process_file","path":"/tmp/stamp.zip"}
//! {"op":"extract_file","destination":"/tmp/out.jpg"}
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cidstamp_intake::Stamper;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::Config;

#[derive(Debug, clap::Args)]
pub struct ServeArg {}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Request {
    ProcessFile { path: PathBuf },
    ExtractFile { destination: PathBuf },
}

impl ServeArg {
    pub fn run(self, config: &Config, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        let mut stamper = Stamper::new(config.intake_options());
        tracing::info!("serving requests on stdin");
        serve(&mut stamper, input, out)
    }
}

fn handle(stamper: &mut Stamper, line: &str) -> Result<Value> {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(Request::ProcessFile { path }) => serde_json::to_value(stamper.process_file(&path))?,
        Ok(Request::ExtractFile { destination }) => serde_json::to_value(stamper.extract_file(&destination))?,
        Err(e) => {
            tracing::warn!(error = %e, "invalid request");
            json!({ "success": false, "error": format!("invalid request: {e}") })
        }
    };
    Ok(response)
}

fn serve(stamper: &mut Stamper, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle(stamper, &line)?;
        serde_json::to_writer(&mut *out, &response)?;
        writeln!(out)?;
        out.flush()?;
    }
    Ok(())
}
