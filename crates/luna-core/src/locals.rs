//! # Theming and locals
//!
//! Screens read their ambient parameters from an explicit [`Locals`] value
//! instead of a global stack:
//!
//! - `Theme`: dark flag plus the surface palette.
//! - `Viewport`: current logical size; drives [`LayoutMode`].
//! - `Platform`: decides how keyboard avoidance behaves.
//! - keyboard height: height of the on-screen input method, 0 when hidden.
//!
//! ```rust
//! use luna_core::*;
//!
//! let locals = Locals::new(Theme::dark(), Viewport::new(390.0, 844.0))
//!     .with_platform(Platform::Ios);
//! assert!(locals.is_compact());
//! assert!(locals.theme.is_dark);
//! ```
//!
//! `Locals` is `Copy` and read-only for everything it is handed to, so the
//! same value always composes the same tree.

use crate::Color;

/// Widths strictly below this are laid out in [`LayoutMode::Compact`].
pub const COMPACT_BREAKPOINT: f32 = 420.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Regular,
}

impl LayoutMode {
    /// `Compact` iff `width < 420`. NaN compares false and yields `Regular`.
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Regular
        }
    }

    pub fn is_compact(self) -> bool {
        self == LayoutMode::Compact
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from_width(self.width)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// Surface tokens supplied by the theme provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Screen background and icon badges.
    pub primary: Color,
    /// Cards and tiles.
    pub secondary: Color,
    /// Body text and glyphs.
    pub text: Color,
    /// Low-emphasis captions.
    pub subtext: Color,
    /// Accent for labels and the title glyph.
    pub highlight: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex("#FFFFFF"),
            secondary: Color::from_hex("#F4F4F5"),
            text: Color::from_hex("#0A0A0A"),
            subtext: Color::from_hex("#64748B"),
            highlight: Color::from_hex("#0EA5E9"),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex("#0A0A0A"),
            secondary: Color::from_hex("#1C1C1E"),
            text: Color::from_hex("#FFFFFF"),
            subtext: Color::from_hex("#A1A1AA"),
            highlight: Color::from_hex("#0EA5E9"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub is_dark: bool,
    pub palette: Palette,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            palette: Palette::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            palette: Palette::dark(),
        }
    }

    /// Picks the light or dark variant of a color pair.
    pub fn pick<T>(&self, light: T, dark: T) -> T {
        if self.is_dark { dark } else { light }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Platform family, as far as keyboard handling is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Locals {
    pub theme: Theme,
    pub viewport: Viewport,
    pub platform: Platform,
    pub keyboard_height: f32,
}

impl Locals {
    pub fn new(theme: Theme, viewport: Viewport) -> Self {
        Self {
            theme,
            viewport,
            platform: Platform::default(),
            keyboard_height: 0.0,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_keyboard_height(mut self, height: f32) -> Self {
        self.keyboard_height = height.max(0.0);
        self
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.viewport.layout_mode()
    }

    pub fn is_compact(&self) -> bool {
        self.layout_mode().is_compact()
    }
}
