//! Environment access.
//!
//! Providers never read the process environment directly; the binary
//! takes one [`EnvironmentMap`] snapshot and passes it down.

pub mod map;

pub use map::EnvironmentMap;
