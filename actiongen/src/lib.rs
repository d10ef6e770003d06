//! Generator for test-actor delegation code.
//!
//! Given an ordered list of modules and the actions each one exposes, this crate
//! renders a single PHP trait with one forwarding method per action. Methods are
//! classified by name (`see*`, `dontSee*`, `am*`, everything else) into step kinds
//! and forward to the scenario's `runStep`. A fingerprint stamped into the file
//! tells callers when regeneration is needed.
//!
//! - **[`core`]**: Pure, deterministic logic (registry, resolution, classification,
//!   emission, fingerprinting, templates). No I/O.
//! - **[`io`]**: Config, module manifest and generated-file access.
//!
//! [`generator`] composes the core into one generation pass; [`build`] wires it
//! to the filesystem for the CLI.

pub mod build;
pub mod core;
pub mod exit_codes;
pub mod generator;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
