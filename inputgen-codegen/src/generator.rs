//! Generation run and its output.

use crate::bodies::{Bodies, FunctionBodies};
use crate::config::{DuplicatePolicy, GeneratorConfig};
use crate::csharp::{DispatchEmitter, member_depth, render_module};
use crate::error::CodegenError;
use inputgen_schema::{Schema, shadowed_bindings, validate_schema};
use std::path::{Path, PathBuf};

/// One generation run over a schema.
///
/// All run state is created inside [`Generator::generate`], which consumes
/// the generator, so nothing carries over between runs.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Runs the generation.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` for invalid configured names or a class
    /// name equal to the asset's class name,
    /// `CodegenError::Schema` if validation fails or a shadowed binding is
    /// found under [`DuplicatePolicy::Reject`].
    pub fn generate(self) -> Result<GeneratedModule, CodegenError> {
        self.config.check()?;
        if self.config.get_class_name() == self.schema.class_name() {
            return Err(CodegenError::config(format!(
                "class name '{}' clashes with the asset class of the same name",
                self.config.get_class_name()
            )));
        }

        if self.config.validates_schema() {
            validate_schema(self.schema)?;
        }

        for shadowed in shadowed_bindings(self.schema) {
            match self.config.get_duplicates() {
                DuplicatePolicy::Reject => return Err(shadowed.into_error().into()),
                DuplicatePolicy::FirstWins => tracing::warn!(
                    "{} binding '{}' in group '{}' is unreachable by name alone; '{}' wins",
                    shadowed.value_type,
                    shadowed.name,
                    shadowed.group,
                    shadowed.first_group
                ),
            }
        }

        let mut bodies = Bodies::new(member_depth(&self.config), self.config.get_line_ending());
        DispatchEmitter::new(self.schema, &self.config).emit(&mut bodies)?;
        let bodies = bodies.into_function_bodies();
        let source = render_module(self.schema, &self.config, &bodies);

        tracing::info!(
            "Generated {} from '{}': {} groups, {} bindings",
            self.config.file_name(),
            self.schema.name,
            self.schema.groups.len(),
            self.schema.binding_count()
        );

        Ok(GeneratedModule {
            file_name: self.config.file_name(),
            bodies,
            source,
        })
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    file_name: String,
    bodies: FunctionBodies,
    source: String,
}

impl GeneratedModule {
    /// Returns the file name the module is written under.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the four function bodies.
    #[must_use]
    pub fn bodies(&self) -> &FunctionBodies {
        &self.bodies
    }

    /// Returns the complete source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consumes the module, returning the source text.
    #[must_use]
    pub fn into_source(self) -> String {
        self.source
    }

    /// Returns the path the module is written to inside `dir`.
    #[must_use]
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }

    /// Writes the module into `dir`, creating the directory if needed.
    ///
    /// A failed write leaves the module intact, so it can be written again.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` if the directory or file cannot be written.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, CodegenError> {
        std::fs::create_dir_all(dir).map_err(|source| CodegenError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = self.path_in(dir);
        std::fs::write(&path, &self.source).map_err(|source| CodegenError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Returns true if the file in `dir` already holds this exact source.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the file exists but cannot be read.
    pub fn is_up_to_date(&self, dir: &Path) -> Result<bool, CodegenError> {
        match std::fs::read_to_string(self.path_in(dir)) {
            Ok(existing) => Ok(existing == self.source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
