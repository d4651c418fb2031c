//! Candidate discovery: resolve the files a batch will consider from an
//! input path, and derive output locations for them.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Resolve the candidate list from `input`.
///
/// A directory yields its immediate children (not recursive); a file yields
/// itself. Every filesystem entry is a candidate at this stage; extension
/// filtering happens later in the batch loop. Paths are absolutized and
/// sorted by name so batch processing order is deterministic.
pub fn resolve_candidates(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    let input = std::path::absolute(input)?;

    if input.is_dir() {
        let mut candidates = Vec::new();
        for entry in fs::read_dir(&input)? {
            let entry = entry?;
            candidates.push(entry.path());
        }
        candidates.sort();
        Ok(candidates)
    } else {
        Ok(vec![input])
    }
}

/// Default output directory for a batch: the directory containing the first
/// candidate. `None` when the batch is empty.
pub fn default_output_dir(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .first()
        .and_then(|path| path.parent())
        .map(Path::to_path_buf)
}

/// Output location for one candidate: the input's stem with the output
/// format's extension, joined to `output_dir`.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(format.extension());
    output_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_replaces_the_extension() {
        let out = output_path_for(
            Path::new("/slides/quarterly review.pptx"),
            Path::new("/out"),
            OutputFormat::Pdf,
        );
        assert_eq!(out, PathBuf::from("/out/quarterly review.pdf"));
    }

    #[test]
    fn missing_input_is_rejected() {
        let err = resolve_candidates(Path::new("/no/such/place")).unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }

    #[test]
    fn directory_listing_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.pptx", "a.ppt", "b.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let candidates = resolve_candidates(dir.path()).unwrap();
        let names: Vec<_> = candidates
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.ppt", "b.txt", "c.pptx"]);
    }

    #[test]
    fn file_input_yields_a_singleton() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("deck.pptx");
        fs::write(&file, b"x").unwrap();
        let candidates = resolve_candidates(&file).unwrap();
        assert_eq!(candidates, vec![file.clone()]);
        assert_eq!(default_output_dir(&candidates), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn empty_batch_has_no_default_output_dir() {
        assert_eq!(default_output_dir(&[]), None);
    }
}
