use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use cidstamp_intake::Stamper;
use cidstamp_verify::{ContentId, VerificationError};

use crate::config::Config;

#[derive(Debug, clap::Args)]
pub struct VerifyArg {
    /// File or stamped archive; archives are checked by their payload
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
    /// Expected identifier (`Qm...`)
    #[arg(value_name = "CID")]
    pub cid:  ContentId,
}

impl VerifyArg {
    pub fn run(self, config: &Config, out: &mut impl Write) -> Result<()> {
        let mut stamper = Stamper::new(config.intake_options());
        let report = stamper.process_file(&self.path).into_result().map_err(|e| anyhow!(e))?;

        if report.identifier() != &self.cid {
            return Err(VerificationError::Mismatch {
                expected: self.cid.to_string(),
                actual:   report.identifier().to_string(),
            }
            .into());
        }
        writeln!(out, "OK  {}  {}", self.cid, report.display_name())?;
        Ok(())
    }
}
