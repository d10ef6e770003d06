//! I/O helpers: config, module manifest and the generated file.

pub mod artifact;
pub mod config;
pub mod manifest;
