//! C# code generation for the Unity Input System.

pub mod dispatch;
pub mod module;

pub use dispatch::DispatchEmitter;
pub use module::{member_depth, render_module};

/// Parameter carrying the binding name.
pub const ACTION_PARAM: &str = "actionName";
/// Parameter carrying the group name in qualified lookups.
pub const MAP_PARAM: &str = "mapName";
/// Parameter selecting just-triggered vs current-state reads.
pub const HELD_PARAM: &str = "held";

/// Quotes a name as a C# string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
