//! Deterministic, pure logic shared by the generator.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod classifier;
pub mod emitter;
pub mod error;
pub mod fingerprint;
pub mod introspect;
pub mod registry;
pub mod resolver;
pub mod template;
pub mod types;
