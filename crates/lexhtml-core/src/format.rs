//! Text format bitmask

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Inline style flags carried by a text node.
///
/// Bit values match the editor's serialized `format` field, so a stored
/// integer can be wrapped directly with [`TextFormat::from_bits`]. Flags are
/// independent; the renderer never assumes any two are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const NONE: TextFormat = TextFormat(0);
    pub const BOLD: TextFormat = TextFormat(1);
    pub const ITALIC: TextFormat = TextFormat(1 << 1);
    pub const STRIKETHROUGH: TextFormat = TextFormat(1 << 2);
    pub const UNDERLINE: TextFormat = TextFormat(1 << 3);
    pub const CODE: TextFormat = TextFormat(1 << 4);
    pub const SUBSCRIPT: TextFormat = TextFormat(1 << 5);
    pub const SUPERSCRIPT: TextFormat = TextFormat(1 << 6);
    pub const HIGHLIGHT: TextFormat = TextFormat(1 << 7);

    /// Wrap a raw bitmask. Unknown bits are kept but never rendered.
    pub const fn from_bits(bits: u32) -> Self {
        TextFormat(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set. `NONE` is never contained.
    pub const fn contains(self, other: TextFormat) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: TextFormat) -> TextFormat {
        TextFormat(self.0 | rhs.0)
    }
}

impl BitOrAssign for TextFormat {
    fn bitor_assign(&mut self, rhs: TextFormat) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let format = TextFormat::BOLD | TextFormat::ITALIC;
        assert!(format.contains(TextFormat::BOLD));
        assert!(format.contains(TextFormat::ITALIC));
        assert!(!format.contains(TextFormat::CODE));
        assert!(!format.contains(TextFormat::NONE));
    }

    #[test]
    fn test_from_bits_matches_editor_values() {
        assert_eq!(TextFormat::from_bits(3), TextFormat::BOLD | TextFormat::ITALIC);
        assert_eq!(TextFormat::from_bits(16), TextFormat::CODE);
        assert_eq!(TextFormat::from_bits(96).bits(), 96);
    }

    #[test]
    fn test_serde_transparent() {
        let format: TextFormat = serde_json::from_str("9").unwrap();
        assert_eq!(format, TextFormat::BOLD | TextFormat::UNDERLINE);
        assert_eq!(serde_json::to_string(&format).unwrap(), "9");
    }
}
