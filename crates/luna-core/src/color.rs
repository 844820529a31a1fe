use smallvec::SmallVec;

use crate::{UiError, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Lenient parser for literals in code. Malformed channels fall back to 0
    /// (alpha to 255); use [`Color::try_from_hex`] for user input.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>, fallback: u8| {
            s.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0..2, 0), channel(2..4, 0), channel(4..6, 0), 255),
            8 => Color(
                channel(0..2, 0),
                channel(2..4, 0),
                channel(4..6, 0),
                channel(6..8, 255),
            ),
            _ => {
                log::warn!("color literal {hex:?} has no 6 or 8 hex digits, using black");
                Color::BLACK
            }
        }
    }

    /// Strict `#RRGGBB` / `#RRGGBBAA` parser.
    pub fn try_from_hex(hex: &str) -> Result<Self, UiError> {
        let invalid = || UiError::InvalidColor(hex.to_string());
        let s = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !(s.len() == 6 || s.len() == 8) || !s.is_ascii() {
            return Err(invalid());
        }
        let mut channels = [255u8; 4];
        for (i, slot) in channels.iter_mut().enumerate().take(s.len() / 2) {
            *slot = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Color(channels[0], channels[1], channels[2], channels[3]))
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// Scales alpha by `opacity` in `0.0..=1.0`, the `bg-x/70` style.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.3 as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        if self.3 == 255 {
            format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
        }
    }
}

/// Brush for filling shapes.
///
/// Modifiers and widgets talk in terms of `Brush` rather than raw `Color` so
/// solid fills and gradients share the same path through layout and paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    /// Solid color fill
    Solid(Color),

    /// Linear gradient from `start` to `end` with evenly spaced stops.
    ///
    /// Points are normalized to the node being drawn: (0,0) is its top-left
    /// corner and (1,1) its bottom-right corner.
    Linear {
        start: Vec2,
        end: Vec2,
        stops: SmallVec<[Color; 4]>,
    },
}

impl Brush {
    /// Colors of the brush in paint order; a solid brush has one stop.
    pub fn stops(&self) -> &[Color] {
        match self {
            Brush::Solid(c) => std::slice::from_ref(c),
            Brush::Linear { stops, .. } => stops,
        }
    }
}

pub struct LinearGradient;

impl LinearGradient {
    /// Top-left to bottom-right.
    pub fn diagonal(stops: &[Color]) -> Brush {
        Self::between(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 1.0, y: 1.0 }, stops)
    }

    pub fn between(start: Vec2, end: Vec2, stops: &[Color]) -> Brush {
        match stops {
            [single] => Brush::Solid(*single),
            _ => Brush::Linear {
                start,
                end,
                stops: SmallVec::from_slice(stops),
            },
        }
    }
}
