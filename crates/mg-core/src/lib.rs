//! mg-core - Core library for migraph
//!
//! This crate provides the migration and log-entry types, the migration
//! graph with its minimum-hop path search, and the YAML migration manifest
//! shared across all migraph components.

pub mod error;
pub mod graph;
pub mod manifest;
pub mod migration;

pub use error::{CoreError, CoreResult};
pub use graph::MigrationGraph;
pub use manifest::Manifest;
pub use migration::{Migration, MigrationKey, MigrationLogEntry};
