//! High-level, ergonomic library API: convert single presentations to PDF
//! files, batch helpers for directories, and the batch report type. Prefer
//! these entrypoints over the low-level `io::soffice` session when
//! integrating DECKPDF.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ConvertParams;
use crate::error::{Error, Result};
use crate::io::discover::{default_output_dir, output_path_for, resolve_candidates};
use crate::io::soffice::SofficeSession;
use crate::types::{Outcome, SourceFormat};

/// Aggregate counters for one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchReport {
    /// Fold one candidate's terminal state into the counters
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converted => self.converted += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.errors += 1,
        }
    }

    /// Total candidates accounted for
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.errors
    }
}

/// Return an iterator over the candidate files resolved from `input`
/// (directory → immediate children, file → itself), sorted by name
pub fn iterate_candidates(input: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    Ok(resolve_candidates(input)?.into_iter())
}

/// Convert a single presentation to the PDF at `output` using `params`.
///
/// The input must carry a recognized presentation extension and `output`
/// must not already exist; an existing output is an error, never replaced.
/// The external session is opened only after both checks pass and is
/// released on every exit path.
pub fn convert_file_to_path(input: &Path, output: &Path, params: &ConvertParams) -> Result<()> {
    if SourceFormat::from_path(input).is_none() {
        return Err(Error::UnsupportedExtension {
            path: input.to_path_buf(),
        });
    }
    if output.exists() {
        return Err(Error::OutputExists {
            path: output.to_path_buf(),
        });
    }

    let mut session = SofficeSession::open(&params.launcher, input)?;
    session.export_to(output)?;
    session.close()?;
    Ok(())
}

/// Convert every presentation found at `input` into `output_dir` using
/// `params`, one external session at a time.
///
/// When `output_dir` is `None` it defaults to the directory containing the
/// first candidate; an empty batch with no explicit directory converts
/// nothing and creates nothing. If `continue_on_error` is true, per-file
/// errors are counted in the report and processing continues; otherwise the
/// first error is returned.
pub fn convert_directory_to_path(
    input: &Path,
    output_dir: Option<&Path>,
    params: &ConvertParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let candidates = resolve_candidates(input)?;

    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => match default_output_dir(&candidates) {
            Some(dir) => dir,
            None => return Ok(BatchReport::default()),
        },
    };
    fs::create_dir_all(&output_dir)?;

    let mut report = BatchReport::default();

    for path in candidates {
        match SourceFormat::from_path(&path) {
            None => {
                info!("Skipping non-presentation entry: {:?}", path);
                report.record(Outcome::Skipped);
            }
            Some(_) => {
                let output_path = output_path_for(&path, &output_dir, params.format);
                info!("Converting: {:?} -> {:?}", path, output_path);

                match convert_file_to_path(&path, &output_path, params) {
                    Ok(()) => {
                        info!("Successfully converted: {:?}", path);
                        report.record(Outcome::Converted);
                    }
                    Err(e) => {
                        report.record(Outcome::Failed);
                        if !continue_on_error {
                            return Err(e);
                        }
                        warn!("Error converting {:?}: {}", path, e);
                    }
                }
            }
        }
    }

    Ok(report)
}
