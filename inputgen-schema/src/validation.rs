//! Schema validation utilities.
//!
//! The generated dispatch code uses group and binding names as `case` labels,
//! and C# rejects duplicate labels inside one `switch`. Validation rejects
//! names that would collide in a qualified lookup and reports names that
//! collide in an unqualified lookup, where the first group in schema order
//! wins.

use crate::error::SchemaError;
use crate::types::{Group, Schema, ValueType, is_identifier, strip_whitespace};
use std::collections::{HashMap, HashSet};

/// A binding that is unreachable through unqualified lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowedBinding {
    /// Binding name.
    pub name: String,
    /// Value type shared by both bindings.
    pub value_type: ValueType,
    /// Group whose binding is dispatched to.
    pub first_group: String,
    /// Group whose binding is shadowed.
    pub group: String,
}

impl ShadowedBinding {
    /// Converts the report into an ambiguity error.
    #[must_use]
    pub fn into_error(self) -> SchemaError {
        SchemaError::AmbiguousBinding {
            name: self.name,
            value_type: self.value_type,
            first_group: self.first_group,
            group: self.group,
        }
    }
}

/// Validates a schema for code generation.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue.
///
/// # Errors
/// Returns `SchemaError` if the schema name, a group name or a binding name is
/// empty or not a C# identifier once whitespace is stripped, if two groups
/// share a name, or if a group declares the same binding name twice.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let class_name = strip_whitespace(&schema.name);
    if class_name.is_empty() {
        return Err(SchemaError::empty_name("schema", "asset"));
    }
    if !is_identifier(&class_name) {
        return Err(SchemaError::invalid_identifier("schema", &schema.name, "asset"));
    }

    let mut seen_groups = HashSet::new();
    for (index, group) in schema.groups.iter().enumerate() {
        let identifier = group.identifier();
        if identifier.is_empty() {
            return Err(SchemaError::empty_name(
                "group",
                format!("schema '{}' (group #{index})", schema.name),
            ));
        }
        if !is_identifier(&identifier) {
            return Err(SchemaError::invalid_identifier(
                "group",
                &group.name,
                format!("schema '{}'", schema.name),
            ));
        }
        if !seen_groups.insert(group.name.as_str()) {
            return Err(SchemaError::duplicate(
                "group",
                &group.name,
                format!("schema '{}'", schema.name),
            ));
        }
        validate_group(group)?;
    }

    Ok(())
}

fn validate_group(group: &Group) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for (index, binding) in group.bindings.iter().enumerate() {
        let identifier = binding.identifier();
        if identifier.is_empty() {
            return Err(SchemaError::empty_name(
                "binding",
                format!("group '{}' (binding #{index})", group.name),
            ));
        }
        if !is_identifier(&identifier) {
            return Err(SchemaError::invalid_identifier(
                "binding",
                &binding.name,
                format!("group '{}'", group.name),
            ));
        }
        if !seen.insert(binding.name.as_str()) {
            return Err(SchemaError::duplicate(
                "binding",
                &binding.name,
                format!("group '{}'", group.name),
            ));
        }
    }

    Ok(())
}

/// Finds bindings that an unqualified lookup can never reach.
///
/// Two bindings collide when they share a name and a value type, since they
/// are dispatched from the same unqualified function. Results are in schema
/// order.
#[must_use]
pub fn shadowed_bindings(schema: &Schema) -> Vec<ShadowedBinding> {
    let mut first_seen: HashMap<(ValueType, &str), &str> = HashMap::new();
    let mut shadowed = Vec::new();

    for group in &schema.groups {
        for binding in &group.bindings {
            let key = (binding.value_type, binding.name.as_str());
            match first_seen.get(&key) {
                Some(first_group) => shadowed.push(ShadowedBinding {
                    name: binding.name.clone(),
                    value_type: binding.value_type,
                    first_group: (*first_group).to_string(),
                    group: group.name.clone(),
                }),
                None => {
                    first_seen.insert(key, group.name.as_str());
                }
            }
        }
    }

    shadowed
}
