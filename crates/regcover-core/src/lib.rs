//! regcover Core - Core types and traits for covering models
//!
//! This crate provides the data side of regcover:
//! - Entity registries that intern regulator and target names
//! - The relation store holding regulator -> target mappings
//! - The sparse row/column model representation shared by solver backends
//! - The `SolverGateway` trait every MILP engine adapter implements
//! - Error types

pub mod error;
pub mod gateway;
pub mod model;
pub mod registry;
pub mod relation;

pub use error::{RegcoverError, Result, SolverError};
pub use gateway::{ObjectiveSense, SolverGateway, VarType};
pub use model::{Column, RowBlock, RowBlockBuilder, RowSense, RowView, SparseModel};
pub use registry::EntityRegistry;
pub use relation::{Relation, RelationStore};
