//! regcover Solver - Covering model construction and decoding
//!
//! This crate turns a [`RelationStore`](regcover_core::RelationStore) into a
//! binary integer program and reads the engine's answer back:
//! - Coverage constraint compilation (`compiler`)
//! - The weighted selection and cardinality-constrained formulations
//! - Solution decoding into named regulator/target sets
//! - Coverage-versus-budget curve scanning
//! - A pure-Rust `microlp` backend and LP text export
//!
//! Logging levels:
//! - **INFO**: Model built, solve start/end
//! - **DEBUG**: Individual curve steps
//! - **TRACE**: Compiled constraint arrays

pub mod backend;
pub mod compiler;
pub mod curve;
pub mod decoder;
pub mod formulation;
pub mod stats;

pub use backend::{write_lp, MicrolpGateway};
pub use compiler::compile_coverage_rows;
pub use curve::{scan_coverage_curve, CoverageCurve, CurveOptions, CurvePoint};
pub use decoder::{decode, is_selected, Selection, SELECTION_THRESHOLD};
pub use formulation::{Formulation, FormulationKind, Weights};
pub use stats::ModelStatistics;
