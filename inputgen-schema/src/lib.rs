//! # inputgen Schema
//!
//! Input-actions schema model, loader and validation.
//!
//! This crate provides:
//! - Type definitions for groups (action maps) and bindings (actions)
//! - Loading from Unity `.inputactions` JSON assets
//! - Validation of names used as dispatch keys

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{Binding, Group, Schema, ValueType, is_identifier, strip_whitespace};
pub use validation::{ShadowedBinding, shadowed_bindings, validate_schema};
