//! Error types for schema loading and validation.

use crate::types::ValueType;
use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required field.
    #[error("missing required field '{field}' on {element}")]
    MissingField {
        /// Element description (asset, map, action).
        element: String,
        /// Field name.
        field: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A name that must produce an identifier is empty.
    #[error("{kind} name in {context} is empty")]
    EmptyName {
        /// Kind of definition (schema, group, binding).
        kind: String,
        /// Where the name was found.
        context: String,
    },

    /// A name that does not produce a valid C# identifier.
    #[error("{kind} name '{name}' in {context} is not a valid identifier")]
    InvalidIdentifier {
        /// Kind of definition (schema, group, binding).
        kind: String,
        /// Name as written in the asset.
        name: String,
        /// Where the name was found.
        context: String,
    },

    /// Duplicate definition within one dispatch scope.
    #[error("duplicate {kind} '{name}' in {scope}")]
    DuplicateDefinition {
        /// Kind of definition (group, binding).
        kind: String,
        /// Name of the duplicate.
        name: String,
        /// Scope in which the name is repeated.
        scope: String,
    },

    /// The same binding name is reachable from two groups in an unqualified lookup.
    #[error(
        "{value_type} binding '{name}' in group '{group}' is shadowed by group '{first_group}' in unqualified lookup"
    )]
    AmbiguousBinding {
        /// Binding name.
        name: String,
        /// Value type shared by both bindings.
        value_type: ValueType,
        /// Group whose binding wins.
        first_group: String,
        /// Group whose binding is unreachable.
        group: String,
    },
}

impl ParseError {
    /// Creates a missing field error.
    pub fn missing_field(element: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            element: element.into(),
            field: field.into(),
        }
    }
}

impl SchemaError {
    /// Creates an empty name error.
    pub fn empty_name(kind: impl Into<String>, context: impl Into<String>) -> Self {
        Self::EmptyName {
            kind: kind.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(
        kind: impl Into<String>,
        name: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            kind: kind.into(),
            name: name.into(),
            context: context.into(),
        }
    }

    /// Creates a duplicate definition error.
    pub fn duplicate(
        kind: impl Into<String>,
        name: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
            scope: scope.into(),
        }
    }
}
