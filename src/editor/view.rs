pub mod view {
    use serde::{Deserialize, Serialize};

    use crate::editor::error::error::EditorError;

    pub const DEFAULT_FONT_SIZE: u16 = 12;
    pub const INVALID_FONT_SIZE: &str = "Font size must be a positive integer.";

    /// Font size in points. Never zero.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(try_from = "u16", into = "u16")]
    pub struct FontSize(u16);

    impl FontSize {
        pub fn new(size: u16) -> Option<Self> {
            (size > 0).then_some(Self(size))
        }

        pub fn get(self) -> u16 {
            self.0
        }

        pub fn increased(self) -> Self {
            Self(self.0.saturating_add(1))
        }

        /// One point smaller, but never below 1.
        pub fn decreased(self) -> Self {
            Self(self.0.saturating_sub(1).max(1))
        }

        /// Parses what the user typed into the font size prompt. Empty input
        /// means the prompt was dismissed and yields `Ok(None)`; whitespace
        /// alone is not a number.
        pub fn parse(input: &str) -> Result<Option<Self>, EditorError> {
            if input.is_empty() {
                return Ok(None);
            }
            let invalid = || EditorError::InvalidInput(INVALID_FONT_SIZE.to_string());
            let value: i64 = input.trim().parse().map_err(|_| invalid())?;
            let size = u16::try_from(value).map_err(|_| invalid())?;
            Self::new(size).map(Some).ok_or_else(invalid)
        }
    }

    impl Default for FontSize {
        fn default() -> Self {
            Self(DEFAULT_FONT_SIZE)
        }
    }

    impl TryFrom<u16> for FontSize {
        type Error = String;

        fn try_from(value: u16) -> Result<Self, Self::Error> {
            Self::new(value).ok_or_else(|| INVALID_FONT_SIZE.to_string())
        }
    }

    impl From<FontSize> for u16 {
        fn from(size: FontSize) -> Self {
            size.0
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Rgb(pub u8, pub u8, pub u8);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColorPair {
        pub foreground: Rgb,
        pub background: Rgb,
    }

    pub const LIGHT_COLORS: ColorPair = ColorPair {
        foreground: Rgb(0, 0, 0),
        background: Rgb(255, 255, 255),
    };

    pub const DARK_COLORS: ColorPair = ColorPair {
        foreground: Rgb(255, 255, 255),
        background: Rgb(0x17, 0x14, 0x14),
    };

    pub const COMMENT_COLOR: Rgb = Rgb(0xbe, 0xbe, 0xbe);

    /// Presentation state of the buffer. Passed to rendering explicitly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ViewSettings {
        pub font_size: FontSize,
        pub dark_mode: bool,
    }

    impl ViewSettings {
        pub fn colors(&self) -> ColorPair {
            if self.dark_mode {
                DARK_COLORS
            } else {
                LIGHT_COLORS
            }
        }

        pub fn toggle_dark_mode(&mut self) -> bool {
            self.dark_mode = !self.dark_mode;
            self.dark_mode
        }

        pub fn increase_font_size(&mut self) -> FontSize {
            self.font_size = self.font_size.increased();
            self.font_size
        }

        pub fn decrease_font_size(&mut self) -> FontSize {
            self.font_size = self.font_size.decreased();
            self.font_size
        }
    }
}
