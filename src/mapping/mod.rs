//! Mapping specification data model.
//!
//! This module defines what a specification *is*; resolving one against a
//! record lives in [`crate::mapper`]:
//! - `expression`: the four-kind expression tree
//! - `spec`: the named [`Mapping`] template and its builder

pub mod expression;
pub mod spec;

pub use expression::{Expression, Fragment};
pub use spec::Mapping;
