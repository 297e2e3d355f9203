use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use cidstamp_archive::{Archive, ArchiveReader, ZipReader};
use cidstamp_intake::{IntakeReport, Stamper, is_archive_name};
use tabled::Tabled;

use crate::config::Config;
use crate::ui::{Field, Formatter};

#[derive(Debug, clap::Args)]
pub struct InspectArg {
    /// Files or stamped archives to identify
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Print one JSON result per line instead of a table
    #[arg(long)]
    pub json:  bool,
    /// Also list the entries of archives (single-file view)
    #[arg(long, conflicts_with = "json")]
    pub list:  bool,
}

#[derive(Debug, Tabled)]
struct Row {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "CID")]
    cid:  String,
}

impl InspectArg {
    pub fn run(self, config: &Config, out: &mut impl Write) -> Result<()> {
        let mut stamper = Stamper::new(config.intake_options());

        if self.json {
            for path in &self.paths {
                serde_json::to_writer(&mut *out, &stamper.process_file(path))?;
                writeln!(out)?;
            }
            return Ok(());
        }

        if let [path] = self.paths.as_slice() {
            let report = stamper.process_file(path).into_result().map_err(|e| anyhow!(e))?;
            let entries = if self.list && is_archive_name(report.display_name(), &config.archive_extensions) {
                list_entries(path)
            } else {
                None
            };
            return single_view(&report, entries, out);
        }

        // Batch: failures are reported on stderr and left out of the table.
        let rows: Vec<Row> = self
            .paths
            .iter()
            .filter_map(|path| match stamper.process_file(path).into_result() {
                Ok(report) => Some(Row {
                    file: report.display_name().to_string(),
                    cid:  report.identifier().to_string(),
                }),
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "skipped");
                    None
                }
            })
            .collect();

        let footer = (rows.len() < self.paths.len())
            .then(|| format!("{} of {} files skipped", self.paths.len() - rows.len(), self.paths.len()));
        let table = Formatter {
            footer,
            ..Formatter::default()
        }
        .build(rows);
        writeln!(out, "{table}")?;
        Ok(())
    }
}

fn list_entries(path: &Path) -> Option<Vec<String>> {
    match ZipReader.open(path) {
        Ok(archive) => Some(archive.entry_names()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot list entries");
            None
        }
    }
}

fn single_view(report: &IntakeReport, entries: Option<Vec<String>>, out: &mut impl Write) -> Result<()> {
    let mut fields = vec![
        Field::new("File", report.display_name()),
        Field::new("CID", report.identifier().as_str()),
        Field::new("Kind", report.kind().to_string()),
    ];
    if let Some(payload) = report.payload_name() {
        fields.push(Field::new("Payload", payload));
    }
    if let Some(preview) = report.preview() {
        fields.push(Field::new("Preview", preview.mime()));
    }
    if let Some(entries) = entries {
        fields.push(Field::new("Entries", entries.join("\n")));
    }

    let table = Formatter {
        hide_col_name: true,
        ..Formatter::default()
    }
    .build(fields);
    writeln!(out, "{table}")?;
    Ok(())
}
