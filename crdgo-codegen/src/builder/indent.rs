//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, as gofmt writes it.
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}
