//! # wd-core
//!
//! Error definitions and default settings shared by every crate in the
//! workingdays workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Default country / subdivision settings.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Settings, DEFAULT_COUNTRY, DEFAULT_SUBDIVISION, NO_SUBDIVISION};
