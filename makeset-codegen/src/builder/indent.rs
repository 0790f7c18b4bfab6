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
    /// 4-space indentation, as rustfmt lays out Rust.
    pub const RUST: Self = Self::Spaces(4);

    /// The text for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match self {
            Self::Spaces(n @ 1..=8) => &SPACES[..usize::from(*n)],
            Self::Spaces(_) => &SPACES[..4],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_out_of_range_width_falls_back() {
        assert_eq!(Indent::Spaces(0).as_str(), "    ");
        assert_eq!(Indent::Spaces(12).as_str(), "    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::RUST);
    }
}
