//! External application session: one spawned headless converter process per
//! presentation, scoped to a single file's conversion.
//!
//! The session owns a private user-profile directory and an export scratch
//! directory, both temporary. The profile keeps one instance from touching
//! the state of the next file's instance; the scratch directory receives the
//! exported PDF before it is moved to its final location. Dropping a session
//! kills and reaps a still-running process, so the external application is
//! released on every exit path.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tempfile::TempDir;
use thiserror::Error;
use tracing::debug;

/// Errors encountered while driving the external application
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to launch `{launcher}`: {source}")]
    Spawn {
        launcher: String,
        #[source]
        source: std::io::Error,
    },

    #[error("converter exited with {status}: {stderr}")]
    Export {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("no PDF was produced for {}", .input.display())]
    MissingOutput { input: PathBuf },

    #[error("session already closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One open presentation inside one running converter instance
#[derive(Debug)]
pub struct SofficeSession {
    child: Option<Child>,
    input: PathBuf,
    profile: Option<TempDir>,
    export_dir: Option<TempDir>,
}

impl SofficeSession {
    /// Launch `launcher` headless against `input`, opening the presentation
    /// without a window and starting the PDF export into the session's
    /// scratch directory. Returns as soon as the process is spawned; the
    /// export completes in [`export_to`](Self::export_to).
    pub fn open(launcher: &Path, input: &Path) -> Result<Self, SessionError> {
        let profile = TempDir::new()?;
        let export_dir = TempDir::new()?;

        // Each instance gets its own UserInstallation; a shared profile is
        // locked by whichever instance started first.
        let profile_url = format!("file://{}", profile.path().display());

        debug!("Launching {:?} for {:?}", launcher, input);
        let child = Command::new(launcher)
            .arg(format!("-env:UserInstallation={profile_url}"))
            .arg("--headless")
            .arg("--norestore")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(export_dir.path())
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SessionError::Spawn {
                launcher: launcher.display().to_string(),
                source,
            })?;

        Ok(Self {
            child: Some(child),
            input: input.to_path_buf(),
            profile: Some(profile),
            export_dir: Some(export_dir),
        })
    }

    /// Wait for the export to finish and move the produced PDF to `dest`.
    /// Blocks until the external process exits.
    pub fn export_to(&mut self, dest: &Path) -> Result<(), SessionError> {
        let Some(child) = self.child.take() else {
            return Err(SessionError::Closed);
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(SessionError::Export {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let produced = self.produced_path()?;
        if !produced.is_file() {
            return Err(SessionError::MissingOutput {
                input: self.input.clone(),
            });
        }

        // The scratch directory may live on another filesystem; fall back to
        // copy-and-remove when a plain rename is refused.
        if fs::rename(&produced, dest).is_err() {
            fs::copy(&produced, dest)?;
            fs::remove_file(&produced)?;
        }
        debug!("Exported {:?} -> {:?}", self.input, dest);
        Ok(())
    }

    /// Tear the session down: reap a leftover process and remove the scratch
    /// directories, surfacing cleanup errors. Dropping the session has the
    /// same effect with errors ignored.
    pub fn close(mut self) -> Result<(), SessionError> {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            child.wait()?;
        }
        if let Some(dir) = self.export_dir.take() {
            dir.close()?;
        }
        if let Some(dir) = self.profile.take() {
            dir.close()?;
        }
        Ok(())
    }

    fn produced_path(&self) -> Result<PathBuf, SessionError> {
        let export_dir = self.export_dir.as_ref().ok_or(SessionError::Closed)?;
        let mut name = self.input.file_stem().unwrap_or_default().to_os_string();
        name.push(".pdf");
        Ok(export_dir.path().join(name))
    }
}

impl Drop for SofficeSession {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_names_the_launcher() {
        let err = SofficeSession::open(
            Path::new("/no/such/launcher"),
            Path::new("/slides/a.pptx"),
        )
        .unwrap_err();
        match err {
            SessionError::Spawn { launcher, .. } => {
                assert_eq!(launcher, "/no/such/launcher");
            }
            other => panic!("expected Spawn, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn export_after_close_is_rejected() {
        // `true` accepts and ignores our arguments, exiting 0 immediately.
        let mut session =
            SofficeSession::open(Path::new("true"), Path::new("/slides/a.pptx")).unwrap();
        // First export fails with MissingOutput (nothing was produced) ...
        let err = session.export_to(Path::new("/tmp/a.pdf")).unwrap_err();
        assert!(matches!(err, SessionError::MissingOutput { .. }));
        // ... and the child is gone, so a second export reports Closed.
        let err = session.export_to(Path::new("/tmp/a.pdf")).unwrap_err();
        assert!(matches!(err, SessionError::Closed));
    }
}
