//! # inputgen
//!
//! Generates name-based C# input accessors from Unity input-actions assets.
//!
//! Given an `.inputactions` asset, inputgen writes a static `InputManager`
//! class with four functions that look up a live input value by action name,
//! optionally qualified by action map name:
//!
//! - `GetVector2(actionName, mapName)` / `GetVector2(actionName)`
//! - `GetButton(actionName, held, mapName)` / `GetButton(actionName, held)`
//!
//! Unknown names fall through to a zero vector or `false`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use inputgen::prelude::*;
//! use std::path::Path;
//!
//! let schema = parse_schema_file(Path::new("Assets/PlayerControls.inputactions"))?;
//! let module = Generator::new(&schema, GeneratorConfig::default()).generate()?;
//! module.write_to_dir(Path::new("Assets/Scripts"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, asset loading and validation
//! - [`codegen`] - C# generation, configuration and persistence

pub mod prelude;

/// Schema model, asset loading and validation.
pub mod schema {
    pub use inputgen_schema::*;
}

/// C# generation from schemas.
pub mod codegen {
    pub use inputgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use inputgen_codegen::{
    CodegenError, GeneratedModule, Generator, GeneratorConfig, generate_from_file,
    generate_from_json,
};
pub use inputgen_schema::{Schema, parse_schema, parse_schema_file};
