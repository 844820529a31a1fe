//! Static copy and records shown on the home screen.
//!
//! Every list record exposes `key()`, the stable identity its view is keyed
//! by, so list diffing never relies on position.

use luna_core::IconKey;

pub const APP_TITLE: &str = "Luna";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: IconKey,
}

impl QuickAction {
    pub const fn key(&self) -> &'static str {
        self.label
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKey,
}

impl PromptCard {
    pub const fn key(&self) -> &'static str {
        self.title
    }
}

/// One metric in the hero banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: IconKey,
    pub label: &'static str,
    pub value: &'static str,
}

impl Highlight {
    pub const fn key(&self) -> &'static str {
        self.label
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub icon: IconKey,
    pub title: &'static str,
    pub description: &'static str,
}

impl Tile {
    pub const fn key(&self) -> &'static str {
        self.title
    }
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Ask anything",
        description: "Chat, plan, and summarise in seconds",
        icon: IconKey::Sparkles,
    },
    QuickAction {
        label: "Voice ready",
        description: "Tap to dictate while on the go",
        icon: IconKey::Mic,
    },
    QuickAction {
        label: "Generate",
        description: "Images, copy, and ideas on demand",
        icon: IconKey::Wand2,
    },
    QuickAction {
        label: "Search web",
        description: "Pull in the latest info",
        icon: IconKey::Search,
    },
];

pub const PROMPT_CARDS: [PromptCard; 3] = [
    PromptCard {
        title: "Turn notes into tasks",
        description: "Paste your meeting notes and get an action list ready to check off.",
        icon: IconKey::ClipboardList,
    },
    PromptCard {
        title: "Visual inspiration",
        description: "Describe a vibe or product idea and let Luna sketch the first concept.",
        icon: IconKey::Image,
    },
    PromptCard {
        title: "Travel-friendly",
        description: "Ask for nearby suggestions or quick directions while you move.",
        icon: IconKey::MapPin,
    },
];

// Display-only; there is no measurement or audit behind these values.
pub const HERO_HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        icon: IconKey::Clock3,
        label: "Response time",
        value: "~1.2s",
    },
    Highlight {
        icon: IconKey::Shield,
        label: "Private",
        value: "Encrypted",
    },
];

pub const HERO_PILLS: [&str; 2] = ["Live voice", "Multi-modal"];

pub const HERO_LABEL: &str = "Mobile ready";
pub const HERO_HEADLINE: &str = "Your on-the-go AI copilot";
pub const HERO_SUBTEXT: &str =
    "Quick access to prompts, voice mode, and saved flows designed for smaller screens.";

pub const UTILITY_TILES: [Tile; 3] = [
    Tile {
        icon: IconKey::Bookmark,
        title: "Saved replies",
        description: "Reuse answers instantly.",
    },
    Tile {
        icon: IconKey::Bell,
        title: "Smart alerts",
        description: "Get notified when Luna finishes.",
    },
    Tile {
        icon: IconKey::Sparkle,
        title: "Tone control",
        description: "Switch between casual or formal.",
    },
];

pub const QUICK_ACTIONS_TITLE: &str = "Quick actions";
pub const QUICK_ACTIONS_CAPTION: &str = "Optimized for one-hand use";
pub const PROMPTS_TITLE: &str = "Suggested mobile prompts";
pub const TILES_TITLE: &str = "Stay organized";

pub const CHAT_INPUT_HINT: &str = "Ask Luna anything";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_keys_are_unique() {
        let actions: HashSet<_> = QUICK_ACTIONS.iter().map(QuickAction::key).collect();
        let prompts: HashSet<_> = PROMPT_CARDS.iter().map(PromptCard::key).collect();
        let tiles: HashSet<_> = UTILITY_TILES.iter().map(Tile::key).collect();
        assert_eq!(actions.len(), QUICK_ACTIONS.len());
        assert_eq!(prompts.len(), PROMPT_CARDS.len());
        assert_eq!(tiles.len(), UTILITY_TILES.len());
    }
}
