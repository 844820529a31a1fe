//! Record-to-card renderers. Each cell is a pure function of the theme and
//! one record; the record's key becomes the view key.

use luna_core::*;
use luna_ui::*;

use crate::content::{self, Highlight, QuickAction, Tile};
use crate::tokens::{ACTION_CARD_WIDTH, RADIUS_CARD, SMALL_TILE_WIDTH, ShadowPreset};

/// Body text in the theme's text color.
pub fn ThemedText(theme: &Theme, text: impl Into<String>) -> View {
    Text(text).color(theme.palette.text)
}

/// Low-emphasis caption text.
pub fn SubText(theme: &Theme, text: impl Into<String>) -> View {
    Text(text).color(theme.palette.subtext)
}

/// Icon centered on a filled badge.
pub fn IconBadge(theme: &Theme, icon: IconKey, diameter: f32, glyph: f32, radius: f32) -> View {
    Box(Modifier::new()
        .size(diameter, diameter)
        .flex_shrink(0.0)
        .background(theme.palette.primary)
        .clip_rounded(radius)
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .child(Icon(icon, glyph).tint(theme.palette.text))
}

fn with_margin(v: View, f: impl FnOnce(Modifier) -> Modifier) -> View {
    let m = f(v.modifier.clone());
    v.modifier(m)
}

/// Title above a wrapping description, growing to fill its row.
fn TitleStack(theme: &Theme, title: &str, description: &str, title_size: f32) -> View {
    let desc_size = if title_size > 14.0 { 14.0 } else { 12.0 };
    Column(Modifier::new().flex_grow(1.0).flex_shrink(1.0).min_width(0.0)).child((
        with_margin(
            ThemedText(theme, title).size(title_size).semibold(),
            |m| m.margin_bottom(4.0),
        ),
        SubText(theme, description).size(desc_size),
    ))
}

pub fn Pill(theme: &Theme, text: &str) -> View {
    let bg = Color::WHITE.with_opacity(theme.pick(0.7, 0.1));
    Box(Modifier::new()
        .padding_values(PaddingValues::symmetric(12.0, 4.0))
        .background(bg)
        .clip_rounded(ROUNDED_FULL)
        .margin_right(8.0))
    .key(text)
    .child(ThemedText(theme, text).size(12.0).semibold().single_line())
}

pub fn HighlightStat(theme: &Theme, stat: &Highlight) -> View {
    Row(Modifier::new()
        .flex_grow(1.0)
        .flex_basis(0.0)
        .min_width(0.0)
        .padding(12.0)
        .background(theme.palette.secondary.with_opacity(0.7))
        .clip_rounded(RADIUS_CARD)
        .shadow(ShadowPreset::Small.shadow())
        .align_items(AlignItems::Center))
    .key(stat.key())
    .child((
        with_margin(
            IconBadge(theme, stat.icon, 36.0, 18.0, ROUNDED_FULL),
            |m| m.margin_right(12.0),
        ),
        Column(Modifier::new().flex_grow(1.0).flex_shrink(1.0).min_width(0.0)).child((
            SubText(theme, stat.label).size(12.0),
            ThemedText(theme, stat.value).size(14.0).semibold(),
        )),
    ))
}

pub fn ActionCard(theme: &Theme, action: &QuickAction) -> View {
    Column(Modifier::new()
        .width(ACTION_CARD_WIDTH)
        .flex_shrink(0.0)
        .padding(16.0)
        .background(theme.palette.secondary)
        .clip_rounded(RADIUS_CARD)
        .shadow(ShadowPreset::Card.shadow()))
    .key(action.key())
    .semantics(Semantics::new(Role::Button).label(action.label))
    .child((
        Row(Modifier::new()
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::SpaceBetween)
            .margin_bottom(12.0))
        .child((
            IconBadge(theme, action.icon, 40.0, 18.0, ROUNDED_FULL),
            Icon(IconKey::ChevronRight, 18.0).tint(theme.palette.text),
        )),
        with_margin(
            ThemedText(theme, action.label).size(16.0).semibold(),
            |m| m.margin_bottom(4.0),
        ),
        SubText(theme, action.description).size(14.0),
    ))
}

pub fn PromptCard(theme: &Theme, card: &content::PromptCard) -> View {
    Row(Modifier::new()
        .padding(16.0)
        .background(theme.palette.secondary)
        .clip_rounded(RADIUS_CARD)
        .shadow(ShadowPreset::Card.shadow()))
    .key(card.key())
    .semantics(Semantics::new(Role::Button).label(card.title))
    .child((
        with_margin(
            IconBadge(theme, card.icon, 44.0, 18.0, RADIUS_CARD),
            |m| m.margin_right(12.0),
        ),
        TitleStack(theme, card.title, card.description, 16.0),
    ))
}

pub fn SmallTile(theme: &Theme, tile: &Tile) -> View {
    Row(Modifier::new()
        .width(SMALL_TILE_WIDTH)
        .padding(12.0)
        .background(theme.palette.secondary)
        .clip_rounded(RADIUS_CARD)
        .shadow(ShadowPreset::Card.shadow())
        .align_items(AlignItems::FlexStart))
    .key(tile.key())
    .child((
        with_margin(
            IconBadge(theme, tile.icon, 36.0, 16.0, ROUNDED_FULL),
            |m| m.margin_right(12.0),
        ),
        TitleStack(theme, tile.title, tile.description, 14.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_HIGHLIGHTS, PROMPT_CARDS, QUICK_ACTIONS, UTILITY_TILES};

    fn background(v: &View) -> Option<Color> {
        match &v.modifier.background {
            Some(Brush::Solid(c)) => Some(*c),
            _ => None,
        }
    }

    #[test]
    fn action_card_shows_its_record() {
        let theme = Theme::light();
        for action in &QUICK_ACTIONS {
            let card = ActionCard(&theme, action);
            assert_eq!(card.key.as_deref(), Some(action.label));
            assert_eq!(card.texts(), vec![action.label, action.description]);
            assert_eq!(card.icons(), vec![action.icon, IconKey::ChevronRight]);
            assert_eq!(card.modifier.width, Some(ACTION_CARD_WIDTH));
        }
    }

    #[test]
    fn prompt_card_shows_its_record() {
        let theme = Theme::dark();
        for prompt in &PROMPT_CARDS {
            let card = PromptCard(&theme, prompt);
            assert_eq!(card.key.as_deref(), Some(prompt.title));
            assert_eq!(card.texts(), vec![prompt.title, prompt.description]);
            assert_eq!(card.icons(), vec![prompt.icon]);
            assert_eq!(card.kind, ViewKind::Row);
        }
    }

    #[test]
    fn small_tile_is_fixed_width() {
        let theme = Theme::light();
        for tile in &UTILITY_TILES {
            let v = SmallTile(&theme, tile);
            assert_eq!(v.modifier.width, Some(SMALL_TILE_WIDTH));
            assert_eq!(v.texts(), vec![tile.title, tile.description]);
            assert_eq!(v.icons(), vec![tile.icon]);
        }
    }

    #[test]
    fn highlight_stat_stacks_label_over_value() {
        let stat = &HERO_HIGHLIGHTS[0];
        let v = HighlightStat(&Theme::light(), stat);
        assert_eq!(v.texts(), vec!["Response time", "~1.2s"]);
        assert_eq!(v.icons(), vec![IconKey::Clock3]);
    }

    #[test]
    fn pill_is_translucent_and_iconless() {
        let light = Pill(&Theme::light(), "Live voice");
        let dark = Pill(&Theme::dark(), "Live voice");
        assert!(light.icons().is_empty());
        assert_eq!(light.texts(), vec!["Live voice"]);
        assert_eq!(background(&light), Some(Color::WHITE.with_alpha(179)));
        assert_eq!(background(&dark), Some(Color::WHITE.with_alpha(26)));
    }

    #[test]
    fn cards_use_theme_surfaces() {
        let light = Theme::light();
        let dark = Theme::dark();
        let a = &QUICK_ACTIONS[0];
        assert_eq!(background(&ActionCard(&light, a)), Some(light.palette.secondary));
        assert_eq!(background(&ActionCard(&dark, a)), Some(dark.palette.secondary));
    }
}
