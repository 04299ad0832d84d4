//! Simple RGB color, written as a hex string

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u8, u8, u8);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }

    /// #ef4444
    pub fn red() -> Self {
        Color(0xef, 0x44, 0x44)
    }

    /// #3b82f6
    pub fn blue() -> Self {
        Color(0x3b, 0x82, 0xf6)
    }

    /// #9ca3af, for anything not owned by a known player
    pub fn gray() -> Self {
        Color(0x9c, 0xa3, 0xaf)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_colors_print_as_lowercase_hex() {
        assert_eq!(Color::red().to_string(), "#ef4444");
        assert_eq!(Color::blue().to_string(), "#3b82f6");
    }
}
