//! Shared types and enums used across DECKPDF.
//! Includes the recognized presentation formats (`SourceFormat`), the
//! produced format (`OutputFormat`), and the per-candidate `Outcome`.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Presentation formats the external application is asked to open
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum SourceFormat {
    Ppt,
    Pptx,
}

impl SourceFormat {
    /// Detect the format from a file name's extension, case-insensitive.
    /// Returns `None` for anything that is not a presentation file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("ppt") {
            Some(SourceFormat::Ppt)
        } else if ext.eq_ignore_ascii_case("pptx") {
            Some(SourceFormat::Pptx)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Ppt => write!(f, "ppt"),
            SourceFormat::Pptx => write!(f, "pptx"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Pdf,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Terminal state of one candidate file within a batch.
/// Skipped candidates count toward neither successes nor errors.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Converted,
    Skipped,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a.PPTX")),
            Some(SourceFormat::Pptx)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("b.Ppt")),
            Some(SourceFormat::Ppt)
        );
    }

    #[test]
    fn non_presentations_are_rejected() {
        assert_eq!(SourceFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(SourceFormat::from_path(Path::new("noextension")), None);
        // `.pptx` alone is a hidden file with no extension, not a presentation
        assert_eq!(SourceFormat::from_path(Path::new(".pptx")), None);
    }
}
