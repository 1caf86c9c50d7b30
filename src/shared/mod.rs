//! Shared helpers used by both the library and the CLI

/// Returns the current version of the `chartkit` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
