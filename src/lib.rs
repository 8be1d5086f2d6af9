//! # Remap - declarative record transformation
//!
//! Remap maps records (ordered key-value structures) to new records according
//! to a declarative mapping specification. A specification nests arbitrary
//! combinations of literal values, conditional branches and composable
//! transformation units ("strategies"); the engine resolves it recursively
//! against each record, threading an opaque caller context through every
//! strategy invocation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   Records   │────▶│    Mapper    │────▶│   Mapped    │
//! │ (any source)│     │ (recursive   │     │   records   │
//! └─────────────┘     │  resolution) │     └─────────────┘
//!                     └──────┬───────┘
//!                            │ resolves
//!                     ┌──────▼───────┐
//!                     │  Expression  │  Strategy | Mapping
//!                     │    tree      │  Fragment | Literal
//!                     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use remap::{Expression, Mapper, Mapping, Record};
//! use remap::strategy::{CopyKey, IfElse};
//! use serde_json::json;
//!
//! let mapping: Mapping = Mapping::new()
//!     .set("title", Expression::strategy(CopyKey::new("Titre")))
//!     .set(
//!         "status",
//!         Expression::strategy(
//!             IfElse::new(
//!                 |r: &Record, _: &()| json!(r["age"].as_i64().unwrap_or(0) >= 18),
//!                 "adult",
//!             )
//!             .otherwise("minor"),
//!         ),
//!     );
//!
//! let record = remap::to_record(&json!({"Titre": "Ma Chanson", "age": 20})).unwrap();
//! let mut expr = Expression::Mapping(mapping);
//! let out = Mapper::new().map(&record, &mut expr, &mut ()).unwrap();
//! assert_eq!(out, json!({"title": "Ma Chanson", "status": "adult"}));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy
//! - [`record`] - Record type and source adapters
//! - [`mapping`] - Specification data model (expressions, mappings, fragments)
//! - [`mapper`] - The resolution engine
//! - [`strategy`] - Strategy contract and built-in strategies

// Core modules
pub mod error;
pub mod record;

// Specification data model
pub mod mapping;

// Engine
pub mod mapper;

// Strategies
pub mod strategy;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{MapError, MapResult};

// =============================================================================
// Re-exports - Record
// =============================================================================

pub use record::{to_record, Record};

// =============================================================================
// Re-exports - Specification model
// =============================================================================

pub use mapping::{Expression, Fragment, Mapping};

// =============================================================================
// Re-exports - Engine
// =============================================================================

pub use mapper::{MapRecords, Mapper};

// =============================================================================
// Re-exports - Strategy contract
// =============================================================================

pub use strategy::{MapperAware, Strategy};
