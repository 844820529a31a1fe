//! Design tokens: fixed gradients, shadows and spacing.

use luna_core::{Color, Shadow};

pub const HERO_GRADIENT_DARK: [Color; 3] = [
    Color::from_rgb(0x0F, 0x17, 0x2A),
    Color::from_rgb(0x11, 0x18, 0x27),
    Color::from_rgb(0x0B, 0x13, 0x2B),
];

pub const HERO_GRADIENT_LIGHT: [Color; 3] = [
    Color::from_rgb(0xD2, 0xE9, 0xFF),
    Color::from_rgb(0xE8, 0xE5, 0xFF),
    Color::from_rgb(0xE0, 0xF7, 0xFF),
];

pub const ORB_GRADIENT: [Color; 3] = [
    Color::from_rgb(0x0E, 0xA5, 0xE9),
    Color::from_rgb(0x63, 0x66, 0xF1),
    Color::from_rgb(0xE8, 0x79, 0xF9),
];

/// Hero banner stops. Depends on the dark flag only.
pub fn hero_gradient(is_dark: bool) -> [Color; 3] {
    if is_dark {
        HERO_GRADIENT_DARK
    } else {
        HERO_GRADIENT_LIGHT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowPreset {
    Small,
    Medium,
    Large,
    Card,
}

impl ShadowPreset {
    pub const fn shadow(self) -> Shadow {
        match self {
            ShadowPreset::Small => Shadow {
                color: Color::from_rgba(0, 0, 0, 20),
                offset_y: 1.0,
                blur: 2.0,
            },
            ShadowPreset::Medium => Shadow {
                color: Color::from_rgba(0, 0, 0, 38),
                offset_y: 4.0,
                blur: 8.0,
            },
            ShadowPreset::Large => Shadow {
                color: Color::from_rgba(0, 0, 0, 51),
                offset_y: 10.0,
                blur: 20.0,
            },
            ShadowPreset::Card => Shadow {
                color: Color::from_rgba(0, 0, 0, 15),
                offset_y: 2.0,
                blur: 6.0,
            },
        }
    }
}

/// Horizontal page inset.
pub const PAGE_PADDING: f32 = 16.0;
pub const SECTION_SPACING: f32 = 20.0;
pub const ITEM_SPACING: f32 = 12.0;
/// Space kept free under the scroll content for the input bar overlay.
pub const INPUT_BAR_RESERVE: f32 = 140.0;

pub const ACTION_CARD_WIDTH: f32 = 220.0;
pub const SMALL_TILE_WIDTH: f32 = 170.0;

pub const RADIUS_CARD: f32 = 16.0;
pub const RADIUS_HERO: f32 = 24.0;
