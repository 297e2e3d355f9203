use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use cidstamp_archive::entry_file_name;
use cidstamp_intake::{IntakeKind, Stamper};

use crate::config::Config;

#[derive(Debug, clap::Args)]
pub struct ExtractArg {
    /// Stamped archive to read
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
    /// Output file; an existing directory receives the payload under its own name
    #[arg(value_name = "DEST")]
    pub dest:    PathBuf,
}

impl ExtractArg {
    pub fn run(self, config: &Config, out: &mut impl Write) -> Result<()> {
        let mut stamper = Stamper::new(config.intake_options());
        let report = stamper.process_file(&self.archive).into_result().map_err(|e| anyhow!(e))?;

        let Some(payload) = report.payload_name().filter(|_| report.kind() == IntakeKind::ManifestArchive) else {
            bail!("'{}' is not a stamped archive", self.archive.display());
        };

        let dest = if self.dest.is_dir() {
            self.dest.join(entry_file_name(payload)?)
        } else {
            self.dest
        };

        let outcome = stamper.extract_file(&dest);
        match (outcome.success, outcome.path, outcome.error) {
            (true, Some(path), _) => {
                writeln!(out, "{}  {}", report.identifier(), path.display())?;
                Ok(())
            }
            (_, _, error) => bail!(error.unwrap_or_else(|| "extraction failed".to_string())),
        }
    }
}
