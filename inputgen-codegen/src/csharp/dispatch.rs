//! Dispatch function emission.
//!
//! Walks the schema once and writes the four accessor functions into a
//! [`Bodies`] accumulator:
//!
//! 1. preamble: signature, opening brace, `Enable()` on the actions holder;
//! 2. dispatch open: `switch(mapName)` for qualified functions,
//!    `switch(actionName)` for unqualified ones;
//! 3. traversal: per group a `case` with a nested `switch(actionName)` in the
//!    qualified functions, per binding a `case` returning the live value in
//!    the functions of its value type;
//! 4. dispatch close: default arms, `Disable()` and the zero/false fallback.
//!
//! Group and binding names appear verbatim in `case` labels and with their
//! whitespace stripped in member accesses.

use super::{ACTION_PARAM, HELD_PARAM, MAP_PARAM, string_literal};
use crate::bodies::{Bodies, BodyTag, TagFilter};
use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use inputgen_schema::{Binding, Group, Schema, ValueType};
use std::collections::HashSet;

/// Emitter for the four dispatch functions of one schema.
pub struct DispatchEmitter<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    holder: String,
}

impl<'a> DispatchEmitter<'a> {
    /// Creates a new dispatch emitter.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self {
            schema,
            config,
            holder: schema.holder_name(),
        }
    }

    /// Emits all four functions into `bodies`.
    ///
    /// Schema content never causes a failure: an empty schema or an empty
    /// group yields a `switch` holding only its default arm. In unqualified
    /// functions only the first binding of a given name and value type is
    /// emitted; later ones stay reachable through qualified lookup.
    ///
    /// # Errors
    /// Returns `CodegenError::IndentUnderflow` if a scope closes below the
    /// depth `bodies` started at.
    pub fn emit(&self, bodies: &mut Bodies) -> Result<(), CodegenError> {
        let all = TagFilter::all();

        bodies.append_each(all, |tag| self.signature(tag));
        bodies.append_to_all("{");
        bodies.scoped(all, |bodies| {
            bodies.append_to_all(&format!("{}.Enable();", self.holder));
            bodies.blank_line(all);

            self.emit_dispatch(bodies)?;

            bodies.append_to_all(&format!("{}.Disable();", self.holder));
            bodies.append_each(all, |tag| fallback_return(tag.value_type).to_string());
            Ok(())
        })?;
        bodies.append_to_all("}");

        Ok(())
    }

    fn emit_dispatch(&self, bodies: &mut Bodies) -> Result<(), CodegenError> {
        let all = TagFilter::all();
        let mut dispatched = HashSet::new();

        bodies.append_each(all, |tag| {
            let key = if tag.qualified { MAP_PARAM } else { ACTION_PARAM };
            format!("switch({key})")
        });
        bodies.append_to_all("{");
        bodies.scoped(all, |bodies| {
            for group in &self.schema.groups {
                self.emit_group(bodies, group, &mut dispatched)?;
            }
            emit_default_arm(bodies, all)
        })?;
        bodies.append_to_all("}");

        Ok(())
    }

    fn emit_group(
        &self,
        bodies: &mut Bodies,
        group: &'a Group,
        dispatched: &mut HashSet<(ValueType, &'a str)>,
    ) -> Result<(), CodegenError> {
        let qualified = TagFilter::qualified(true);
        tracing::debug!(
            "Emitting group '{}' ({} bindings)",
            group.name,
            group.bindings.len()
        );

        bodies.append_to_qualification_class(
            true,
            &format!("case {}:", string_literal(&group.name)),
        );
        bodies.scoped(qualified, |bodies| {
            bodies.append_to_qualification_class(true, &format!("switch({ACTION_PARAM})"));
            bodies.append_to_qualification_class(true, "{");
            bodies.scoped(qualified, |bodies| {
                for binding in &group.bindings {
                    self.emit_binding(bodies, group, binding, dispatched)?;
                }
                emit_default_arm(bodies, qualified)
            })?;
            bodies.append_to_qualification_class(true, "}");
            bodies.append_to_qualification_class(true, "break;");
            Ok(())
        })
    }

    fn emit_binding(
        &self,
        bodies: &mut Bodies,
        group: &Group,
        binding: &'a Binding,
        dispatched: &mut HashSet<(ValueType, &'a str)>,
    ) -> Result<(), CodegenError> {
        let value_type = binding.value_type;
        let label = format!("case {}:", string_literal(&binding.name));
        let target = format!(
            "{}.{}.{}",
            self.holder,
            group.identifier(),
            binding.identifier()
        );
        let statement = return_expression(value_type, &target);

        if dispatched.insert((value_type, binding.name.as_str())) {
            bodies.append_to_value_type_class(value_type, &label);
            return bodies.scoped(TagFilter::value_type(value_type), |bodies| {
                bodies.append_to_value_type_class(value_type, &statement);
                Ok(())
            });
        }

        tracing::debug!(
            "Binding '{}' in group '{}' is shadowed in unqualified lookup",
            binding.name,
            group.name
        );
        let qualified_only = TagFilter::exact(BodyTag::new(value_type, true));
        bodies.append(qualified_only, &label);
        bodies.scoped(qualified_only, |bodies| {
            bodies.append(qualified_only, &statement);
            Ok(())
        })
    }

    /// Returns the signature line of one function.
    fn signature(&self, tag: BodyTag) -> String {
        let (return_type, name) = match tag.value_type {
            ValueType::Vector2 => ("Vector2", self.config.get_vector_function()),
            ValueType::Boolean => ("bool", self.config.get_button_function()),
        };

        let mut params = vec![format!("string {ACTION_PARAM}")];
        if tag.value_type == ValueType::Boolean {
            params.push(format!("bool {HELD_PARAM}"));
        }
        if tag.qualified {
            params.push(format!("string {MAP_PARAM}"));
        }

        format!(
            "public static {return_type} {name}({})",
            params.join(", ")
        )
    }
}

fn emit_default_arm(bodies: &mut Bodies, filter: TagFilter) -> Result<(), CodegenError> {
    bodies.append(filter, "default:");
    bodies.scoped(filter, |bodies| {
        bodies.append(filter, "break;");
        Ok(())
    })
}

/// Returns the statement reading a binding's live value.
///
/// Buttons read `triggered` (pressed this frame) when `held` is true and the
/// raw state otherwise.
fn return_expression(value_type: ValueType, target: &str) -> String {
    match value_type {
        ValueType::Vector2 => format!("return {target}.ReadValue<Vector2>();"),
        ValueType::Boolean => format!(
            "return {HELD_PARAM} ? {target}.triggered : {target}.ReadValue<bool>();"
        ),
    }
}

fn fallback_return(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Vector2 => "return new Vector2(0f, 0f);",
        ValueType::Boolean => "return false;",
    }
}
