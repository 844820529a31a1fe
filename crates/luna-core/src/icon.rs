//! Closed set of glyph names the icon registry can draw.
//!
//! Views never carry free-form icon strings: a `ViewKind::Icon` holds an
//! [`IconKey`], so an unknown glyph cannot reach the renderer. Names read
//! from text go through [`IconKey::from_str`].

use std::fmt;
use std::str::FromStr;

use crate::UiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKey {
    Sparkles,
    Mic,
    Wand2,
    Search,
    ClipboardList,
    Image,
    MapPin,
    Clock3,
    Shield,
    ChevronRight,
    Bookmark,
    Bell,
    Sparkle,
    Menu,
    ChevronDown,
    ArrowUp,
    Plus,
}

impl IconKey {
    pub const ALL: [IconKey; 17] = [
        IconKey::Sparkles,
        IconKey::Mic,
        IconKey::Wand2,
        IconKey::Search,
        IconKey::ClipboardList,
        IconKey::Image,
        IconKey::MapPin,
        IconKey::Clock3,
        IconKey::Shield,
        IconKey::ChevronRight,
        IconKey::Bookmark,
        IconKey::Bell,
        IconKey::Sparkle,
        IconKey::Menu,
        IconKey::ChevronDown,
        IconKey::ArrowUp,
        IconKey::Plus,
    ];

    /// Registry name, as used by the lucide glyph set.
    pub const fn name(self) -> &'static str {
        match self {
            IconKey::Sparkles => "Sparkles",
            IconKey::Mic => "Mic",
            IconKey::Wand2 => "Wand2",
            IconKey::Search => "Search",
            IconKey::ClipboardList => "ClipboardList",
            IconKey::Image => "Image",
            IconKey::MapPin => "MapPin",
            IconKey::Clock3 => "Clock3",
            IconKey::Shield => "Shield",
            IconKey::ChevronRight => "ChevronRight",
            IconKey::Bookmark => "Bookmark",
            IconKey::Bell => "Bell",
            IconKey::Sparkle => "Sparkle",
            IconKey::Menu => "Menu",
            IconKey::ChevronDown => "ChevronDown",
            IconKey::ArrowUp => "ArrowUp",
            IconKey::Plus => "Plus",
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconKey {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UiError::UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for key in IconKey::ALL {
            assert_eq!(key.name().parse::<IconKey>().ok(), Some(key));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "Rocket".parse::<IconKey>().unwrap_err();
        assert!(matches!(err, UiError::UnknownIcon(ref n) if n == "Rocket"));
    }
}
