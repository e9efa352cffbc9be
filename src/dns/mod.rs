//! Name resolution.
//!
//! Forward DNS resolution of probe targets, with an optional per-entry
//! override that bypasses the lookup entirely.

mod resolution;

pub use resolution::{resolve_host_to_ip, resolve_target};
