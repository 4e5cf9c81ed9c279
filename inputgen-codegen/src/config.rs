//! Generator configuration.

use crate::error::CodegenError;
use inputgen_schema::is_identifier;

/// Line terminator used in generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, as written by Windows editors.
    CrLf,
}

impl LineEnding {
    /// Returns the terminator text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// How bindings shadowed in unqualified lookup are handled.
///
/// Two groups declaring a binding with the same name and value type both
/// appear in the qualified functions, but only one of them can be reached
/// from the unqualified function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The first group in schema order wins; later arms are not emitted.
    #[default]
    FirstWins,
    /// Generation fails on the first shadowed binding.
    Reject,
}

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    class_name: String,
    namespace: Option<String>,
    vector_function: String,
    button_function: String,
    line_ending: LineEnding,
    duplicates: DuplicatePolicy,
    validate_schema: bool,
}

impl GeneratorConfig {
    /// Default name of the generated class and file.
    pub const DEFAULT_CLASS_NAME: &'static str = "InputManager";
    /// Default name of the vector accessor.
    pub const DEFAULT_VECTOR_FUNCTION: &'static str = "GetVector2";
    /// Default name of the button accessor.
    pub const DEFAULT_BUTTON_FUNCTION: &'static str = "GetButton";

    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_name: Self::DEFAULT_CLASS_NAME.to_string(),
            namespace: None,
            vector_function: Self::DEFAULT_VECTOR_FUNCTION.to_string(),
            button_function: Self::DEFAULT_BUTTON_FUNCTION.to_string(),
            line_ending: LineEnding::Lf,
            duplicates: DuplicatePolicy::FirstWins,
            validate_schema: true,
        }
    }

    /// Sets the generated class name (also the file stem).
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Wraps the generated class in a namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the vector accessor name.
    #[must_use]
    pub fn vector_function(mut self, name: impl Into<String>) -> Self {
        self.vector_function = name.into();
        self
    }

    /// Sets the button accessor name.
    #[must_use]
    pub fn button_function(mut self, name: impl Into<String>) -> Self {
        self.button_function = name.into();
        self
    }

    /// Sets the line ending.
    #[must_use]
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets the policy for bindings shadowed in unqualified lookup.
    #[must_use]
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Enables or disables schema validation before emission.
    #[must_use]
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate_schema = validate;
        self
    }

    /// Returns the generated class name.
    #[must_use]
    pub fn get_class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the namespace, if any.
    #[must_use]
    pub fn get_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the vector accessor name.
    #[must_use]
    pub fn get_vector_function(&self) -> &str {
        &self.vector_function
    }

    /// Returns the button accessor name.
    #[must_use]
    pub fn get_button_function(&self) -> &str {
        &self.button_function
    }

    /// Returns the line ending.
    #[must_use]
    pub fn get_line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns the duplicate policy.
    #[must_use]
    pub fn get_duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Returns true if the schema is validated before emission.
    #[must_use]
    pub fn validates_schema(&self) -> bool {
        self.validate_schema
    }

    /// Returns the generated file name.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.cs", self.class_name)
    }

    /// Checks that every configured name is a usable C# identifier.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` naming the first invalid setting.
    pub fn check(&self) -> Result<(), CodegenError> {
        check_identifier("class name", &self.class_name)?;
        check_identifier("vector function", &self.vector_function)?;
        check_identifier("button function", &self.button_function)?;

        if let Some(namespace) = &self.namespace {
            for segment in namespace.split('.') {
                check_identifier("namespace", segment).map_err(|_| {
                    CodegenError::config(format!("invalid namespace '{namespace}'"))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_identifier(what: &str, name: &str) -> Result<(), CodegenError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(CodegenError::config(format!("invalid {what} '{name}'")))
    }
}
