//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version banner for `--version`.
pub fn version_line() -> String {
    format!("flappy {} ({} {})", PKG_VERSION, BUILD_DATE, BUILD_COMMIT)
}
