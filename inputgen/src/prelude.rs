//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use inputgen::prelude::*;
//! ```

// Schema types
pub use inputgen_schema::{
    Binding, Group, ParseError, Schema, SchemaError, ValueType, parse_schema, parse_schema_file,
    validate_schema,
};

// Generation types
pub use inputgen_codegen::{
    CodegenError, DuplicatePolicy, GeneratedModule, Generator, GeneratorConfig, LineEnding,
    generate_from_file, generate_from_json,
};
