//! Indentation tracking for emitted source text.

use crate::error::CodegenError;

/// Indentation unit: one tab per nesting level.
pub const INDENT_UNIT: &str = "\t";

/// Current nesting depth of an output buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indentation {
    depth: usize,
}

impl Indentation {
    /// Creates a tracker at depth 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Creates a tracker at the given depth.
    #[must_use]
    pub const fn with_depth(depth: usize) -> Self {
        Self { depth }
    }

    /// Returns the current depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Opens one nesting level.
    pub fn increase(&mut self) {
        self.depth += 1;
    }

    /// Closes one nesting level.
    ///
    /// # Errors
    /// Returns `CodegenError::IndentUnderflow` at depth 0; the depth stays 0.
    pub fn decrease(&mut self) -> Result<(), CodegenError> {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or(CodegenError::IndentUnderflow)?;
        Ok(())
    }

    /// Renders the indentation prefix.
    #[must_use]
    pub fn render(&self) -> String {
        INDENT_UNIT.repeat(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_new() {
        let indent = Indentation::new();
        assert_eq!(indent.depth(), 0);
        assert_eq!(indent.render(), "");
    }

    #[test]
    fn test_indentation_increase_decrease() {
        let mut indent = Indentation::with_depth(1);
        indent.increase();
        indent.increase();
        assert_eq!(indent.render(), "\t\t\t");

        indent.decrease().expect("decrease at depth 3");
        assert_eq!(indent.depth(), 2);
        assert_eq!(indent.render(), "\t\t");
    }

    #[test]
    fn test_indentation_underflow() {
        let mut indent = Indentation::new();
        let err = indent.decrease().unwrap_err();
        assert!(matches!(err, CodegenError::IndentUnderflow));
        assert_eq!(indent.depth(), 0);
    }
}
