//! I/O layer for input discovery and the external application session.
//! Provides the `discover` helpers for candidate resolution and output
//! naming, and the `soffice` session guard that drives the conversion.
pub mod discover;
pub use discover::{default_output_dir, output_path_for, resolve_candidates};

pub mod soffice;
pub use soffice::{SessionError, SofficeSession};
