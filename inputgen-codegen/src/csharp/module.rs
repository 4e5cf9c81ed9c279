//! C# module assembly.

use crate::bodies::FunctionBodies;
use crate::config::GeneratorConfig;
use crate::indent::INDENT_UNIT;
use inputgen_schema::Schema;

/// Using declarations at the top of the generated file.
const USINGS: [&str; 5] = [
    "using System;",
    "using System.Collections;",
    "using System.Collections.Generic;",
    "using UnityEngine;",
    "using UnityEngine.InputSystem;",
];

/// Returns the depth of class members, where function bodies start.
#[must_use]
pub fn member_depth(config: &GeneratorConfig) -> usize {
    class_depth(config) + 1
}

fn class_depth(config: &GeneratorConfig) -> usize {
    usize::from(config.get_namespace().is_some())
}

/// Renders the complete source file around the four function bodies.
///
/// The bodies must have been emitted at [`member_depth`] with the same line
/// ending as `config`.
#[must_use]
pub fn render_module(schema: &Schema, config: &GeneratorConfig, bodies: &FunctionBodies) -> String {
    let nl = config.get_line_ending().as_str();
    let class_indent = INDENT_UNIT.repeat(class_depth(config));
    let member_indent = INDENT_UNIT.repeat(member_depth(config));
    let mut output = String::new();

    for using in USINGS {
        output.push_str(using);
        output.push_str(nl);
    }

    if let Some(namespace) = config.get_namespace() {
        output.push_str(&format!("namespace {namespace}{nl}{{{nl}"));
    }

    output.push_str(&format!(
        "{class_indent}public static class {} : object{nl}{class_indent}{{{nl}",
        config.get_class_name()
    ));
    output.push_str(&format!(
        "{member_indent}public static {} {} = new();{nl}{nl}",
        schema.class_name(),
        schema.holder_name()
    ));

    for (_, body) in bodies.iter() {
        output.push_str(body);
        output.push_str(nl);
    }

    output.push_str(&format!("{class_indent}}}{nl}"));
    if config.get_namespace().is_some() {
        output.push_str(&format!("}}{nl}"));
    }
    output.push_str(nl);

    output
}
