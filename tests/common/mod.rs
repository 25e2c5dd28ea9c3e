//! Consolidated test utilities for problem-rotator
//!
//! This module provides unified testing utilities for integration tests,
//! focused on isolated store directories so tests never touch real user
//! state and never depend on the network.

pub mod assertions;
pub mod env;
pub mod fixtures;
