//! Solver backends and model export.
//!
//! - [`MicrolpGateway`] - [`SolverGateway`](regcover_core::SolverGateway) on
//!   the pure-Rust `microlp` engine through `good_lp`
//! - [`write_lp`] - CPLEX LP text rendering of a buffered model

mod lp_format;
mod microlp;

pub use lp_format::write_lp;
pub use microlp::MicrolpGateway;
