//! Common test utilities for routing-engine
//!
//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;
