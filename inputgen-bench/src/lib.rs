//! # inputgen Bench
//!
//! Synthetic schemas for generation benchmarks.

use inputgen_schema::{Group, Schema, ValueType};

/// Builds a schema with `groups` groups of `bindings_per_group` bindings each.
///
/// Bindings alternate between the two value types. Every name is unique
/// across the schema, so no binding is shadowed.
#[must_use]
pub fn synthetic_schema(groups: usize, bindings_per_group: usize) -> Schema {
    let mut schema = Schema::new("Bench Controls");
    for g in 0..groups {
        let mut group = Group::new(format!("Map{g}"));
        for b in 0..bindings_per_group {
            let value_type = if b % 2 == 0 {
                ValueType::Vector2
            } else {
                ValueType::Boolean
            };
            group = group.with_binding(format!("Action{g}_{b}"), value_type);
        }
        schema.add_group(group);
    }
    schema
}

/// Renders a schema back into `.inputactions` JSON.
#[must_use]
pub fn synthetic_asset(groups: usize, bindings_per_group: usize) -> String {
    let schema = synthetic_schema(groups, bindings_per_group);
    let maps: Vec<String> = schema
        .groups
        .iter()
        .map(|group| {
            let actions: Vec<String> = group
                .bindings
                .iter()
                .map(|binding| {
                    format!(
                        r#"{{"name":"{}","type":"Value","expectedControlType":"{}"}}"#,
                        binding.name,
                        binding.value_type.control_type()
                    )
                })
                .collect();
            format!(r#"{{"name":"{}","actions":[{}]}}"#, group.name, actions.join(","))
        })
        .collect();
    format!(r#"{{"name":"{}","maps":[{}]}}"#, schema.name, maps.join(","))
}
