//! Integration tests for the morph-rs crates.
//!
//! End-to-end tests that verify the interaction between decoding,
//! transforms and the morph engine.
