use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Conversion parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertParams {
    /// External application launcher, e.g. `soffice`
    pub launcher: PathBuf,
    pub format: OutputFormat,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            launcher: default_launcher(),
            format: OutputFormat::Pdf,
        }
    }
}

/// Resolve the default launcher program: the `SOFFICE_BIN` environment
/// variable when set, otherwise `soffice` looked up on `PATH`.
pub fn default_launcher() -> PathBuf {
    std::env::var_os("SOFFICE_BIN")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("soffice"))
}
