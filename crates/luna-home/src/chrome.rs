//! Header and input bar. The screen only positions these; their behavior
//! (drawer, assistant picker, message send) belongs to the host app.

use luna_core::*;
use luna_ui::*;

use crate::content::{APP_TITLE, CHAT_INPUT_HINT};

pub const HEADER_HEIGHT: f32 = 56.0;
pub const CHAT_INPUT_HEIGHT: f32 = 76.0;

/// Top bar with a centered title between two slot groups.
pub fn Header(theme: &Theme, title: &str, left: Vec<View>, right: Vec<View>) -> View {
    let slot = |key: &str, children: Vec<View>| {
        Row(Modifier::new().align_items(AlignItems::Center).column_gap(8.0))
            .key(key)
            .child(children)
    };

    Row(Modifier::new()
        .fill_max_width()
        .height(HEADER_HEIGHT)
        .flex_shrink(0.0)
        .padding_values(PaddingValues::symmetric(16.0, 8.0))
        .background(theme.palette.primary)
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::SpaceBetween))
    .key("header")
    .semantics(Semantics::new(Role::Header).label(title))
    .child((
        slot("header-left", left),
        Text(title)
            .size(17.0)
            .semibold()
            .color(theme.palette.text)
            .single_line(),
        slot("header-right", right),
    ))
}

pub fn DrawerButton(theme: &Theme) -> View {
    Box(Modifier::new()
        .size(40.0, 40.0)
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .key("drawer-button")
    .semantics(Semantics::new(Role::Button).label("Open menu"))
    .child(Icon(IconKey::Menu, 24.0).tint(theme.palette.text))
}

/// "Luna" followed by a highlighted dot.
pub fn AppTitle(theme: &Theme) -> View {
    Row(Modifier::new().align_items(AlignItems::FlexEnd))
        .key("app-title")
        .child((
            Text(APP_TITLE)
                .size(24.0)
                .bold()
                .color(theme.palette.text)
                .single_line(),
            Text(".")
                .size(24.0)
                .bold()
                .color(theme.palette.highlight)
                .single_line(),
        ))
}

pub fn BotSwitch(theme: &Theme) -> View {
    Row(Modifier::new()
        .padding_values(PaddingValues::symmetric(10.0, 6.0))
        .background(theme.palette.secondary)
        .clip_rounded(ROUNDED_FULL)
        .align_items(AlignItems::Center))
    .key("bot-switch")
    .semantics(Semantics::new(Role::Button).label("Switch assistant"))
    .child(Icon(IconKey::ChevronDown, 20.0).tint(theme.palette.text))
}

fn RoundButton(icon: IconKey, background: Color, tint: Color) -> View {
    Box(Modifier::new()
        .size(44.0, 44.0)
        .flex_shrink(0.0)
        .background(background)
        .clip_rounded(ROUNDED_FULL)
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .semantics(Semantics::new(Role::Button).label(icon.name()))
    .child(Icon(icon, 20.0).tint(tint))
}

/// Input bar pinned to the bottom edge of its parent.
pub fn ChatInput(theme: &Theme) -> View {
    Row(Modifier::new()
        .absolute()
        .offset(Some(0.0), None, Some(0.0), Some(0.0))
        .height(CHAT_INPUT_HEIGHT)
        .padding_values(PaddingValues::symmetric(16.0, 16.0))
        .column_gap(8.0)
        .background(theme.palette.primary)
        .shadow(crate::tokens::ShadowPreset::Medium.shadow())
        .align_items(AlignItems::Center))
    .key("chat-input")
    .child((
        RoundButton(IconKey::Plus, theme.palette.secondary, theme.palette.text),
        TextField(CHAT_INPUT_HINT).modifier(
            Modifier::new()
                .flex_grow(1.0)
                .flex_shrink(1.0)
                .min_width(0.0)
                .height(44.0)
                .padding_values(PaddingValues::symmetric(16.0, 0.0))
                .background(theme.palette.secondary)
                .clip_rounded(ROUNDED_FULL),
        ),
        RoundButton(IconKey::ArrowUp, theme.palette.highlight, Color::WHITE),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_places_groups_around_the_title() {
        let theme = Theme::light();
        let h = Header(
            &theme,
            "",
            vec![DrawerButton(&theme), AppTitle(&theme)],
            vec![BotSwitch(&theme)],
        );
        let left = h.find_key("header-left").unwrap();
        let right = h.find_key("header-right").unwrap();
        assert_eq!(left.children.len(), 2);
        assert_eq!(right.children.len(), 1);
        assert_eq!(h.texts(), vec!["Luna", ".", ""]);
        assert_eq!(h.icons(), vec![IconKey::Menu, IconKey::ChevronDown]);
    }

    #[test]
    fn title_dot_uses_highlight() {
        let theme = Theme::dark();
        let title = AppTitle(&theme);
        match &title.children[1].kind {
            ViewKind::Text { text, color, .. } => {
                assert_eq!(text, ".");
                assert_eq!(*color, theme.palette.highlight);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn chat_input_is_anchored_to_the_bottom() {
        let bar = ChatInput(&Theme::light());
        assert_eq!(bar.modifier.position_type, Some(PositionType::Absolute));
        assert_eq!(bar.modifier.offset_bottom, Some(0.0));
        assert_eq!(bar.icons(), vec![IconKey::Plus, IconKey::ArrowUp]);
        assert!(bar.walk().any(
            |v| matches!(&v.kind, ViewKind::TextField { hint } if hint == CHAT_INPUT_HINT)
        ));
    }
}
