//! The character ramp used for density mapping.

/// Density ramp with 70 levels.
/// Characters ordered from densest (`$`) to sparsest (space).
/// Works well on light backgrounds and in plain text files.
#[rustfmt::skip]
pub const DENSITY_RAMP: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*',
    'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w', 'm',
    'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X',
    'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j', 'f', 't',
    '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']',
    '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l',
    'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// An ordered, immutable character ramp.
///
/// Index 0 is the darkest glyph and the last index is the lightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    chars: &'static [char],
}

impl Ramp {
    /// The 70-level density ramp.
    pub const fn density() -> Self {
        Ramp {
            chars: DENSITY_RAMP,
        }
    }

    /// Number of levels in the ramp.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, or `None` past the sparsest level.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The sparsest (lightest) character.
    pub fn lightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    pub fn chars(&self) -> &'static [char] {
        self.chars
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Ramp::density()
    }
}
