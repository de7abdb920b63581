//! Text format bit-flags.
//!
//! Lexical serializes inline text formatting as a single integer bit-mask on
//! each text node. The full flag set is modeled here; the renderer applies
//! bold, italic, and strikethrough and ignores the rest.

use serde::{Deserialize, Serialize};

/// Bit-mask of inline formatting flags on a text node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFormat(pub u32);

impl TextFormat {
    pub const BOLD: u32 = 1;
    pub const ITALIC: u32 = 1 << 1;
    pub const STRIKETHROUGH: u32 = 1 << 2;
    pub const UNDERLINE: u32 = 1 << 3;
    pub const CODE: u32 = 1 << 4;
    pub const SUBSCRIPT: u32 = 1 << 5;
    pub const SUPERSCRIPT: u32 = 1 << 6;
    pub const HIGHLIGHT: u32 = 1 << 7;

    /// Create a format mask from raw flag bits.
    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn is_bold(self) -> bool {
        self.0 & Self::BOLD != 0
    }

    pub fn is_italic(self) -> bool {
        self.0 & Self::ITALIC != 0
    }

    pub fn is_strikethrough(self) -> bool {
        self.0 & Self::STRIKETHROUGH != 0
    }

    pub fn is_underline(self) -> bool {
        self.0 & Self::UNDERLINE != 0
    }

    pub fn is_code(self) -> bool {
        self.0 & Self::CODE != 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_by_default() {
        let format = TextFormat::default();
        assert!(!format.is_bold());
        assert!(!format.is_italic());
        assert!(!format.is_strikethrough());
    }

    #[test]
    fn flags_are_independent() {
        let format = TextFormat::new(TextFormat::BOLD | TextFormat::STRIKETHROUGH);
        assert!(format.is_bold());
        assert!(!format.is_italic());
        assert!(format.is_strikethrough());
    }

    #[test]
    fn unapplied_flags_are_still_readable() {
        let format = TextFormat::new(TextFormat::UNDERLINE | TextFormat::CODE);
        assert!(format.is_underline());
        assert!(format.is_code());
        assert!(!format.is_bold());
    }

    #[test]
    fn deserializes_from_bare_integer() {
        let format: TextFormat = serde_json::from_str("7").unwrap();
        assert!(format.is_bold());
        assert!(format.is_italic());
        assert!(format.is_strikethrough());
    }
}
