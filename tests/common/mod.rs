//! Shared test support: a stub launcher standing in for the external
//! presentation application, so the batch path runs without LibreOffice.
use std::fs;
use std::path::{Path, PathBuf};

/// Shell script that understands the `--convert-to pdf --outdir DIR INPUT`
/// invocation and writes a placeholder PDF next to where the real
/// application would. Inputs with `corrupt` in the name fail the way a
/// broken presentation does.
const STUB_LAUNCHER: &str = r#"#!/bin/sh
outdir=""
input=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    --outdir) outdir="$2"; shift 2 ;;
    --convert-to) shift 2 ;;
    -*) shift ;;
    *) input="$1"; shift ;;
  esac
done
case "$input" in
  *corrupt*) echo "source file could not be loaded" >&2; exit 1 ;;
esac
name=$(basename "$input")
printf '%%PDF-1.4 stub\n' > "$outdir/${name%.*}.pdf"
"#;

/// Write the stub launcher into `dir` and return its path.
pub fn stub_launcher(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-soffice");
    fs::write(&path, STUB_LAUNCHER).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Populate `dir` with the named files, each holding placeholder bytes.
pub fn seed_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"placeholder presentation bytes").unwrap();
    }
}
