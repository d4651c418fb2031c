//! Run-level configuration resolved once at startup. These are internal
//! primitives consumed by the high-level `api` module and the CLI.
pub mod params;
