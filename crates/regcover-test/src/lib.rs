//! Shared test fixtures for regcover crates.
//!
//! This crate provides data and a reference engine for testing.
//! It depends only on `regcover-core`, so `regcover-solver` can use it from
//! its own unit tests without linking two copies of itself.
//!
//! - [`fixtures`] - Hand-written relation stores
//! - [`brute_force`] - Exhaustive 0/1 reference gateway for small models
//! - [`strategies`] - `proptest` strategies for random mapping lists
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! regcover-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use regcover_test::brute_force::BruteForceGateway;
//! use regcover_test::fixtures::two_regulator_store;
//! ```

pub mod brute_force;
pub mod fixtures;
pub mod strategies;

// Re-export commonly used items at crate root for convenience
pub use brute_force::BruteForceGateway;
pub use fixtures::{ladder_store, store_from_pairs, two_regulator_store};
pub use strategies::{small_mappings, store_from_owned};
