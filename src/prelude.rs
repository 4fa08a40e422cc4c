//! Prelude module for the genealogy_date crate.
//!
//! Re-exports the derive macros from derive_more used across the value types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
