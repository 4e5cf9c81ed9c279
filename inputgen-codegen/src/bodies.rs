//! Accumulation of the four generated function bodies.
//!
//! Each accessor function is built in its own buffer. A buffer is identified by
//! a [`BodyTag`] and appends are routed through a [`TagFilter`], so one call can
//! write the same line into every buffer that shares a value type or a
//! qualification mode. Every buffer tracks its own indentation.

use crate::config::LineEnding;
use crate::error::CodegenError;
use crate::indent::Indentation;
use inputgen_schema::ValueType;

/// Identifies one of the four accessor functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyTag {
    /// Value type returned by the function.
    pub value_type: ValueType,
    /// True if the function dispatches on group name before binding name.
    pub qualified: bool,
}

impl BodyTag {
    /// All tags, in the order the functions appear in the generated module.
    ///
    /// Value types follow [`ValueType::ALL`]; the qualified function comes first.
    pub const ALL: [Self; 4] = [
        Self::new(ValueType::ALL[0], true),
        Self::new(ValueType::ALL[0], false),
        Self::new(ValueType::ALL[1], true),
        Self::new(ValueType::ALL[1], false),
    ];

    /// Creates a new tag.
    #[must_use]
    pub const fn new(value_type: ValueType, qualified: bool) -> Self {
        Self {
            value_type,
            qualified,
        }
    }
}

/// Selects a subset of the buffers. `None` matches any value on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Required value type.
    pub value_type: Option<ValueType>,
    /// Required qualification mode.
    pub qualified: Option<bool>,
}

impl TagFilter {
    /// Matches every buffer.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            value_type: None,
            qualified: None,
        }
    }

    /// Matches the two buffers with the given qualification mode.
    #[must_use]
    pub const fn qualified(qualified: bool) -> Self {
        Self {
            value_type: None,
            qualified: Some(qualified),
        }
    }

    /// Matches the two buffers with the given value type.
    #[must_use]
    pub const fn value_type(value_type: ValueType) -> Self {
        Self {
            value_type: Some(value_type),
            qualified: None,
        }
    }

    /// Matches exactly one buffer.
    #[must_use]
    pub const fn exact(tag: BodyTag) -> Self {
        Self {
            value_type: Some(tag.value_type),
            qualified: Some(tag.qualified),
        }
    }

    /// Returns true if the tag is selected.
    #[must_use]
    pub fn matches(&self, tag: BodyTag) -> bool {
        self.value_type.is_none_or(|value_type| value_type == tag.value_type)
            && self.qualified.is_none_or(|qualified| qualified == tag.qualified)
    }
}

/// One function body under construction.
#[derive(Debug, Clone)]
struct OutputBuffer {
    tag: BodyTag,
    text: String,
    indent: Indentation,
}

/// Owned accumulator for the four function bodies of one generation run.
///
/// Buffers only grow; a `Bodies` is meant to be filled once and then consumed
/// with [`Bodies::into_function_bodies`]. Emitting twice into the same
/// accumulator produces every function twice.
#[derive(Debug, Clone)]
pub struct Bodies {
    buffers: [OutputBuffer; 4],
    line_ending: LineEnding,
}

impl Bodies {
    /// Creates four empty buffers, each starting at `base_depth`.
    #[must_use]
    pub fn new(base_depth: usize, line_ending: LineEnding) -> Self {
        let buffers = BodyTag::ALL.map(|tag| OutputBuffer {
            tag,
            text: String::new(),
            indent: Indentation::with_depth(base_depth),
        });
        Self {
            buffers,
            line_ending,
        }
    }

    /// Appends an indented line to every buffer matching `filter`.
    pub fn append(&mut self, filter: TagFilter, text: &str) {
        self.append_each(filter, |_| text.to_string());
    }

    /// Appends an indented line built per buffer to every buffer matching `filter`.
    pub fn append_each(&mut self, filter: TagFilter, mut text: impl FnMut(BodyTag) -> String) {
        let line_ending = self.line_ending.as_str();
        for buffer in self.matching(filter) {
            let line = text(buffer.tag);
            buffer.text.push_str(&buffer.indent.render());
            buffer.text.push_str(&line);
            buffer.text.push_str(line_ending);
        }
    }

    /// Appends an indented line to all four buffers.
    pub fn append_to_all(&mut self, text: &str) {
        self.append(TagFilter::all(), text);
    }

    /// Appends an indented line to the two buffers with the given qualification mode.
    pub fn append_to_qualification_class(&mut self, qualified: bool, text: &str) {
        self.append(TagFilter::qualified(qualified), text);
    }

    /// Appends an indented line to the two buffers with the given value type.
    pub fn append_to_value_type_class(&mut self, value_type: ValueType, text: &str) {
        self.append(TagFilter::value_type(value_type), text);
    }

    /// Appends an empty line, without indentation.
    pub fn blank_line(&mut self, filter: TagFilter) {
        let line_ending = self.line_ending.as_str();
        for buffer in self.matching(filter) {
            buffer.text.push_str(line_ending);
        }
    }

    /// Opens a nesting level in every buffer matching `filter`.
    pub fn enter(&mut self, filter: TagFilter) {
        for buffer in self.matching(filter) {
            buffer.indent.increase();
        }
    }

    /// Closes a nesting level in every buffer matching `filter`.
    ///
    /// # Errors
    /// Returns `CodegenError::IndentUnderflow` if a matching buffer is at
    /// depth 0. No buffer is changed in that case.
    pub fn exit(&mut self, filter: TagFilter) -> Result<(), CodegenError> {
        if self.matching(filter).any(|buffer| buffer.indent.depth() == 0) {
            return Err(CodegenError::IndentUnderflow);
        }
        for buffer in self.matching(filter) {
            buffer.indent.decrease()?;
        }
        Ok(())
    }

    /// Runs `body` one nesting level deeper in the buffers matching `filter`.
    ///
    /// # Errors
    /// Propagates errors from `body` and from closing the level.
    pub fn scoped<F>(&mut self, filter: TagFilter, body: F) -> Result<(), CodegenError>
    where
        F: FnOnce(&mut Self) -> Result<(), CodegenError>,
    {
        self.enter(filter);
        body(self)?;
        self.exit(filter)
    }

    /// Returns the text accumulated so far for one function.
    #[must_use]
    pub fn body(&self, tag: BodyTag) -> &str {
        self.buffers
            .iter()
            .find(|buffer| buffer.tag == tag)
            .map_or("", |buffer| buffer.text.as_str())
    }

    /// Returns the current indentation depth of one buffer.
    #[must_use]
    pub fn depth(&self, tag: BodyTag) -> usize {
        self.buffers
            .iter()
            .find(|buffer| buffer.tag == tag)
            .map_or(0, |buffer| buffer.indent.depth())
    }

    /// Consumes the accumulator.
    #[must_use]
    pub fn into_function_bodies(self) -> FunctionBodies {
        let [vector_qualified, vector_unqualified, button_qualified, button_unqualified] =
            self.buffers.map(|buffer| buffer.text);
        FunctionBodies {
            vector_qualified,
            vector_unqualified,
            button_qualified,
            button_unqualified,
        }
    }

    fn matching(&mut self, filter: TagFilter) -> impl Iterator<Item = &mut OutputBuffer> {
        self.buffers
            .iter_mut()
            .filter(move |buffer| filter.matches(buffer.tag))
    }
}

/// The four finished function bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBodies {
    /// Vector lookup by binding and group name.
    pub vector_qualified: String,
    /// Vector lookup by binding name.
    pub vector_unqualified: String,
    /// Button lookup by binding and group name.
    pub button_qualified: String,
    /// Button lookup by binding name.
    pub button_unqualified: String,
}

impl FunctionBodies {
    /// Returns the body for one function.
    #[must_use]
    pub fn get(&self, tag: BodyTag) -> &str {
        match (tag.value_type, tag.qualified) {
            (ValueType::Vector2, true) => &self.vector_qualified,
            (ValueType::Vector2, false) => &self.vector_unqualified,
            (ValueType::Boolean, true) => &self.button_qualified,
            (ValueType::Boolean, false) => &self.button_unqualified,
        }
    }

    /// Iterates over the bodies in module order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyTag, &str)> {
        BodyTag::ALL.into_iter().map(move |tag| (tag, self.get(tag)))
    }
}
