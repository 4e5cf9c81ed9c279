//! # inputgen Codegen
//!
//! C# input dispatch code generation from Unity input-actions schemas.
//!
//! This crate provides:
//! - The four name-based accessor functions (`GetVector2` and `GetButton`,
//!   each with and without a group name)
//! - Module assembly and persistence of `InputManager.cs`
//! - Generator configuration

pub mod bodies;
pub mod config;
pub mod csharp;
pub mod error;
pub mod generator;
pub mod indent;

pub use bodies::{Bodies, BodyTag, FunctionBodies, TagFilter};
pub use config::{DuplicatePolicy, GeneratorConfig, LineEnding};
pub use error::CodegenError;
pub use generator::{GeneratedModule, Generator};
pub use indent::Indentation;

/// Generates the input manager from an input-actions JSON string.
///
/// # Arguments
/// * `json` - `.inputactions` asset content
/// * `config` - Generator configuration
///
/// # Returns
/// The generated module.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_json(
    json: &str,
    config: GeneratorConfig,
) -> Result<GeneratedModule, CodegenError> {
    let schema = inputgen_schema::parse_schema(json)?;
    Generator::new(&schema, config).generate()
}

/// Generates the input manager from an input-actions asset file.
///
/// # Arguments
/// * `path` - Path to the `.inputactions` asset
/// * `config` - Generator configuration
///
/// # Returns
/// The generated module.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: GeneratorConfig,
) -> Result<GeneratedModule, CodegenError> {
    let schema = inputgen_schema::parse_schema_file(path)?;
    Generator::new(&schema, config).generate()
}
