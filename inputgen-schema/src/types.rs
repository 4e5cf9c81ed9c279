//! Schema type definitions.
//!
//! This module contains the data structures describing an input-actions asset:
//! the asset itself, its groups (action maps) and their bindings (actions).

use std::fmt;

/// Value type produced by a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Button-like trigger read as a boolean.
    Boolean,
    /// Two-component vector (stick, pointer delta, WASD composite).
    Vector2,
}

impl ValueType {
    /// All handled value types, in emission order.
    pub const ALL: [Self; 2] = [Self::Vector2, Self::Boolean];

    /// Maps an asset control type to a value type.
    ///
    /// `expected_control_type` wins when present; an action without one is
    /// only recognised when its action type is `Button`. Returns `None` for
    /// control types the generator does not dispatch on.
    #[must_use]
    pub fn from_control_type(expected_control_type: &str, action_type: &str) -> Option<Self> {
        match expected_control_type {
            "Button" => Some(Self::Boolean),
            "Vector2" => Some(Self::Vector2),
            "" if action_type == "Button" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// Returns the asset control type name.
    #[must_use]
    pub const fn control_type(&self) -> &'static str {
        match self {
            Self::Boolean => "Button",
            Self::Vector2 => "Vector2",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("Boolean"),
            Self::Vector2 => f.write_str("Vector2"),
        }
    }
}

/// A named, typed input signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Binding name, used verbatim as a dispatch key.
    pub name: String,
    /// Value type of the binding.
    pub value_type: ValueType,
}

impl Binding {
    /// Creates a new binding.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }

    /// Returns the binding name as an identifier (whitespace stripped).
    #[must_use]
    pub fn identifier(&self) -> String {
        strip_whitespace(&self.name)
    }
}

/// A named collection of bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Group name, used verbatim as the first dispatch key.
    pub name: String,
    /// Bindings in traversal order.
    pub bindings: Vec<Binding>,
}

impl Group {
    /// Creates a new empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    /// Adds a binding to the group.
    pub fn add_binding(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Adds a binding, builder style.
    #[must_use]
    pub fn with_binding(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.add_binding(Binding::new(name, value_type));
        self
    }

    /// Returns the group name as an identifier (whitespace stripped).
    #[must_use]
    pub fn identifier(&self) -> String {
        strip_whitespace(&self.name)
    }
}

/// Complete input schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Asset name; also the name of the wrapper class holding the live actions.
    pub name: String,
    /// Groups in traversal order.
    pub groups: Vec<Group>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// Adds a group to the schema.
    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Adds a group, builder style.
    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.add_group(group);
        self
    }

    /// Returns the total number of bindings across all groups.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.groups.iter().map(|group| group.bindings.len()).sum()
    }

    /// Returns the wrapper class name (whitespace stripped).
    #[must_use]
    pub fn class_name(&self) -> String {
        strip_whitespace(&self.name)
    }

    /// Returns the name of the static field holding the live actions instance.
    #[must_use]
    pub fn holder_name(&self) -> String {
        strip_whitespace(&self.name).to_lowercase()
    }
}

/// Removes every whitespace character from a name.
#[must_use]
pub fn strip_whitespace(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns true if `name` is usable as a C# identifier: a letter or `_`
/// followed by letters, digits or `_`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
