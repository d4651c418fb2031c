//! Command Line Interface (CLI) layer for DECKPDF.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for the batch conversion flow. It wires user-provided
//! options to the underlying library functionality exposed via
//! `deckpdf::api`.
//!
//! If you are embedding DECKPDF into another application, prefer using
//! the high-level `deckpdf::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
