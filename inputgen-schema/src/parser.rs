//! Unity `.inputactions` asset loader.
//!
//! The asset is a JSON document. Only the keys the generator needs are read:
//!
//! ```json
//! {
//!     "name": "PlayerControls",
//!     "maps": [
//!         {
//!             "name": "Player",
//!             "actions": [
//!                 { "name": "Movement", "type": "Value", "expectedControlType": "Vector2" }
//!             ]
//!         }
//!     ]
//! }
//! ```
//!
//! Actions whose control type has no [`ValueType`] are skipped.

use crate::error::ParseError;
use crate::types::{Binding, Group, Schema, ValueType};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AssetEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    maps: Vec<MapEntry>,
}

#[derive(Debug, Deserialize)]
struct MapEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    actions: Vec<ActionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    action_type: Option<String>,
    #[serde(default)]
    expected_control_type: Option<String>,
}

/// Parses an input-actions asset from a JSON string.
///
/// # Arguments
/// * `json` - Asset content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, or if the asset, a map or
/// an action has no name.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    parse_asset(json, None)
}

/// Parses an input-actions asset file.
///
/// When the asset carries no `name`, the file stem is used instead, which is
/// what Unity names the generated wrapper class after.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or its content is invalid.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let json = std::fs::read_to_string(path)?;
    let stem = path.file_stem().and_then(|stem| stem.to_str());
    parse_asset(&json, stem)
}

fn parse_asset(json: &str, fallback_name: Option<&str>) -> Result<Schema, ParseError> {
    let asset: AssetEntry = serde_json::from_str(json)?;

    let name = asset
        .name
        .filter(|name| !name.trim().is_empty())
        .or_else(|| fallback_name.map(str::to_string))
        .ok_or_else(|| ParseError::missing_field("asset", "name"))?;

    let mut schema = Schema::new(name);
    for (index, map) in asset.maps.into_iter().enumerate() {
        schema.add_group(parse_map(map, index)?);
    }

    tracing::debug!(
        "Loaded asset '{}': {} groups, {} bindings",
        schema.name,
        schema.groups.len(),
        schema.binding_count()
    );

    Ok(schema)
}

fn parse_map(map: MapEntry, index: usize) -> Result<Group, ParseError> {
    let name = map
        .name
        .ok_or_else(|| ParseError::missing_field(format!("action map #{index}"), "name"))?;
    let mut group = Group::new(name);

    for (action_index, action) in map.actions.into_iter().enumerate() {
        let action_name = action.name.ok_or_else(|| {
            ParseError::missing_field(
                format!("action #{action_index} of map '{}'", group.name),
                "name",
            )
        })?;
        let expected = action.expected_control_type.unwrap_or_default();
        let action_type = action.action_type.unwrap_or_default();

        match ValueType::from_control_type(&expected, &action_type) {
            Some(value_type) => group.add_binding(Binding::new(action_name, value_type)),
            None => tracing::debug!(
                "Skipping action '{}' in map '{}': unsupported control type '{}'",
                action_name,
                group.name,
                expected
            ),
        }
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ASSET: &str = r#"{
    "name": "PlayerControls",
    "maps": [
        {
            "name": "Player",
            "id": "6f1d4c1e-0000-0000-0000-000000000001",
            "actions": [
                {
                    "name": "Movement",
                    "type": "Value",
                    "id": "6f1d4c1e-0000-0000-0000-000000000002",
                    "expectedControlType": "Vector2",
                    "processors": "",
                    "interactions": "",
                    "initialStateCheck": true
                },
                {
                    "name": "Jump",
                    "type": "Button",
                    "expectedControlType": "Button"
                },
                {
                    "name": "Zoom",
                    "type": "Value",
                    "expectedControlType": "Axis"
                },
                {
                    "name": "Legacy Fire",
                    "type": "Button",
                    "expectedControlType": ""
                }
            ],
            "bindings": []
        },
        {
            "name": "New action map",
            "actions": []
        }
    ],
    "controlSchemes": []
}"#;

    #[test]
    fn test_parse_schema() {
        let schema = parse_schema(ASSET).expect("Failed to parse");
        assert_eq!(schema.name, "PlayerControls");
        assert_eq!(schema.groups.len(), 2);

        let player = &schema.groups[0];
        assert_eq!(player.name, "Player");
        assert_eq!(
            player.bindings,
            vec![
                Binding::new("Movement", ValueType::Vector2),
                Binding::new("Jump", ValueType::Boolean),
                Binding::new("Legacy Fire", ValueType::Boolean),
            ]
        );

        assert_eq!(schema.groups[1].name, "New action map");
        assert!(schema.groups[1].bindings.is_empty());
    }

    #[test]
    fn test_parse_schema_without_maps() {
        let schema = parse_schema(r#"{ "name": "Empty" }"#).expect("Failed to parse");
        assert_eq!(schema.name, "Empty");
        assert!(schema.groups.is_empty());
    }

    #[test]
    fn test_parse_schema_missing_name() {
        let err = parse_schema(r#"{ "maps": [] }"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_parse_schema_missing_map_name() {
        let err = parse_schema(r#"{ "name": "A", "maps": [ { "actions": [] } ] }"#).unwrap_err();
        assert!(err.to_string().contains("action map #0"));
    }

    #[test]
    fn test_parse_schema_missing_action_name() {
        let json = r#"{ "name": "A", "maps": [ { "name": "M", "actions": [ { "type": "Button" } ] } ] }"#;
        let err = parse_schema(json).unwrap_err();
        assert!(err.to_string().contains("map 'M'"));
    }

    #[test]
    fn test_parse_schema_invalid_json() {
        let err = parse_schema("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_parse_schema_file_uses_stem_as_fallback() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("VehicleControls.inputactions");
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        file.write_all(br#"{ "maps": [ { "name": "Drive", "actions": [] } ] }"#)
            .expect("Failed to write file");

        let schema = parse_schema_file(&path).expect("Failed to parse");
        assert_eq!(schema.name, "VehicleControls");
        assert_eq!(schema.groups[0].name, "Drive");
    }

    #[test]
    fn test_parse_schema_file_missing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = parse_schema_file(&dir.path().join("missing.inputactions")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
