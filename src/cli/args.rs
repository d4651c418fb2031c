use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckpdf", version, about = "DECKPDF CLI")]
pub struct CliArgs {
    /// Input presentation file, or directory whose immediate entries are
    /// converted (not recursive)
    pub input: PathBuf,

    /// Output directory for the produced PDFs; created if absent
    pub output: PathBuf,

    /// External application launcher. Defaults to the `SOFFICE_BIN`
    /// environment variable, or `soffice` on PATH
    #[arg(long)]
    pub launcher: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
