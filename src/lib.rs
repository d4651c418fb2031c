#![doc = r#"
DECKPDF — a batch PPT/PPTX to PDF converter.

This crate turns PowerPoint presentations into PDFs by driving a locally
installed, headless-capable presentation application (LibreOffice, or any
`soffice`-compatible launcher). It enumerates input files, runs one external
open → export → close session per file, and reports aggregate counts. It
powers the DECKPDF CLI and can be embedded in your own Rust applications.

The crate never interprets presentation content itself; every conversion is
delegated to the external application.

Requirements
------------
- A `soffice`-compatible binary on `PATH`, or pointed at via the
  `SOFFICE_BIN` environment variable / `ConvertParams::launcher`.
- Rust 2024 edition toolchain.

Quick start: convert one presentation
-------------------------------------
```rust,no_run
use std::path::Path;
use deckpdf::{convert_file_to_path, ConvertParams};

fn main() -> deckpdf::Result<()> {
    let params = ConvertParams::default();
    convert_file_to_path(
        Path::new("/slides/intro.pptx"),
        Path::new("/out/intro.pdf"),
        &params,
    )
}
```

Batch helper
------------
```rust,no_run
use std::path::Path;
use deckpdf::{convert_directory_to_path, ConvertParams};

fn main() -> deckpdf::Result<()> {
    let params = ConvertParams::default();
    let report = convert_directory_to_path(
        Path::new("/slides"),
        Some(Path::new("/out")),
        &params,
        true, // continue_on_error
    )?;

    println!(
        "converted={} skipped={} errors={}",
        report.converted, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `deckpdf::Result<T>`; match on `deckpdf::Error`
to handle specific cases, e.g. output collisions or external session
failures.

```rust,no_run
use std::path::Path;
use deckpdf::{convert_file_to_path, ConvertParams, Error};

fn main() {
    let params = ConvertParams::default();
    match convert_file_to_path(Path::new("/slides/a.pptx"), Path::new("/out/a.pdf"), &params) {
        Ok(()) => {}
        Err(Error::OutputExists { path }) => eprintln!("won't overwrite {}", path.display()),
        Err(Error::Session(e)) => eprintln!("external application failed: {e}"),
        Err(other) => eprintln!("other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `SourceFormat`, `Outcome`).
- [`io`] — input discovery and the external application session.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ConvertParams;
pub use error::{Error, Result};
pub use types::{Outcome, OutputFormat, SourceFormat};

// Discovery and session
pub use io::discover::{default_output_dir, output_path_for, resolve_candidates};
pub use io::soffice::{SessionError, SofficeSession};

// High-level API re-exports
pub use api::{
    BatchReport, convert_directory_to_path, convert_file_to_path, iterate_candidates,
};
