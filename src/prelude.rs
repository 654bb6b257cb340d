//! Prelude module for the wareki crate.
//!
//! Re-exports the derive macros used throughout the crate.

#[allow(unused_imports)]
pub use derive_more::Display;
