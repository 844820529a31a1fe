use luna_core::*;
use luna_ui::layout;

use crate::content::{PROMPT_CARDS, QUICK_ACTIONS, UTILITY_TILES};
use crate::tokens::{HERO_GRADIENT_DARK, HERO_GRADIENT_LIGHT, INPUT_BAR_RESERVE};
use crate::{HomeScreen, VoiceOrbMetrics};

fn locals(width: f32, dark: bool) -> Locals {
    let theme = if dark { Theme::dark() } else { Theme::light() };
    Locals::new(theme, Viewport::new(width, 844.0))
}

fn orb_outer(view: &View) -> Option<f32> {
    view.find_key("voice-orb")?.modifier.size.map(|s| s.width)
}

fn hero_stops(view: &View) -> Vec<Color> {
    view.find_key("hero")
        .and_then(|h| h.modifier.background.as_ref())
        .map(|b| b.stops().to_vec())
        .unwrap_or_default()
}

fn keyed_children<'a>(view: &'a View, key: &str) -> Vec<&'a View> {
    view.find_key(key)
        .map(|v| v.children.iter().collect())
        .unwrap_or_default()
}

#[test]
fn compact_breakpoint_switches_orb_size() {
    assert_eq!(orb_outer(&HomeScreen(&locals(419.0, false))), Some(120.0));
    assert_eq!(orb_outer(&HomeScreen(&locals(420.0, false))), Some(140.0));
    assert_eq!(VoiceOrbMetrics::for_compact(true), VoiceOrbMetrics::COMPACT);
    assert_eq!(VoiceOrbMetrics::for_compact(false), VoiceOrbMetrics::REGULAR);
}

#[test]
fn quick_actions_follow_declared_order() {
    let view = HomeScreen(&locals(390.0, false));
    let row = view.find_key("quick-actions-row").unwrap();
    let cards = &row.children[0].children;
    let keys: Vec<_> = cards.iter().map(|c| c.key.as_deref().unwrap()).collect();
    assert_eq!(keys, ["Ask anything", "Voice ready", "Generate", "Search web"]);

    for (card, action) in cards.iter().zip(QUICK_ACTIONS.iter()) {
        let texts = card.texts();
        assert_eq!(texts[0], action.label);
        assert_eq!(texts[1], action.description);
        assert_eq!(card.icons()[0], action.icon);
    }
}

#[test]
fn prompt_cards_follow_declared_order() {
    let view = HomeScreen(&locals(390.0, true));
    let keys: Vec<_> = keyed_children(&view, "prompt-list")
        .iter()
        .map(|c| c.key.clone().unwrap())
        .collect();
    assert_eq!(
        keys,
        ["Turn notes into tasks", "Visual inspiration", "Travel-friendly"]
    );
    let expected: Vec<_> = PROMPT_CARDS.iter().map(|p| p.title.to_string()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn tile_grid_has_three_tiles_in_both_modes() {
    for width in [320.0, 419.0, 420.0, 800.0] {
        let view = HomeScreen(&locals(width, false));
        let tiles = keyed_children(&view, "tile-grid");
        let titles: Vec<_> = tiles.iter().map(|t| t.key.as_deref().unwrap()).collect();
        assert_eq!(titles, ["Saved replies", "Smart alerts", "Tone control"]);
        assert_eq!(tiles.len(), UTILITY_TILES.len());
    }
}

#[test]
fn hero_gradient_depends_only_on_scheme() {
    for width in [360.0, 430.0] {
        assert_eq!(hero_stops(&HomeScreen(&locals(width, true))), HERO_GRADIENT_DARK);
        assert_eq!(hero_stops(&HomeScreen(&locals(width, false))), HERO_GRADIENT_LIGHT);
    }
    let hex: Vec<_> = HERO_GRADIENT_DARK.iter().map(|c| c.to_hex()).collect();
    assert_eq!(hex, ["#0F172A", "#111827", "#0B132B"]);
    let hex: Vec<_> = HERO_GRADIENT_LIGHT.iter().map(|c| c.to_hex()).collect();
    assert_eq!(hex, ["#D2E9FF", "#E8E5FF", "#E0F7FF"]);
}

#[test]
fn hero_shows_pills_and_highlights() {
    let view = HomeScreen(&locals(390.0, false));
    let hero = view.find_key("hero").unwrap();
    let texts = hero.texts();
    for expected in [
        "MOBILE READY",
        "Live voice",
        "Multi-modal",
        "Response time",
        "~1.2s",
        "Private",
        "Encrypted",
    ] {
        assert!(texts.iter().any(|t| t == expected), "missing {expected}");
    }
    assert_eq!(keyed_children(&view, "hero-stats").len(), 2);
}

#[test]
fn composing_is_idempotent() {
    let ctx = locals(375.0, true);
    assert_eq!(HomeScreen(&ctx), HomeScreen(&ctx));
    assert_ne!(HomeScreen(&ctx), HomeScreen(&locals(375.0, false)));
}

#[test]
fn header_has_fixed_groups_and_empty_title() {
    let view = HomeScreen(&Locals::default());
    let header = view.find_key("header").unwrap();
    assert_eq!(
        header.semantics.as_ref().map(|s| s.label.as_deref()),
        Some(Some(""))
    );
    let left: Vec<_> = keyed_children(&view, "header-left")
        .iter()
        .map(|v| v.key.as_deref())
        .collect();
    assert_eq!(left, [Some("drawer-button"), Some("app-title")]);
    let right: Vec<_> = keyed_children(&view, "header-right")
        .iter()
        .map(|v| v.key.as_deref())
        .collect();
    assert_eq!(right, [Some("bot-switch")]);
}

#[test]
fn scroll_content_reserves_room_for_input_bar() {
    let view = HomeScreen(&Locals::default());
    let content = view.find_key("home-content").unwrap();
    assert_eq!(
        content.modifier.padding_values.map(|p| p.bottom),
        Some(INPUT_BAR_RESERVE)
    );
}

mod layout_pass {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.5
    }

    fn laid_out(ctx: &Locals) -> luna_ui::LayoutTree {
        let size = Size {
            width: ctx.viewport.width,
            height: ctx.viewport.height,
        };
        layout(&HomeScreen(ctx), size).unwrap()
    }

    #[test]
    fn cells_keep_their_fixed_widths() {
        let tree = laid_out(&Locals::default());
        for action in &QUICK_ACTIONS {
            assert!(approx(tree.find_key(action.label).unwrap().rect.w, 220.0));
        }
        for tile in &UTILITY_TILES {
            assert!(approx(tree.find_key(tile.title).unwrap().rect.w, 170.0));
        }
        assert!(approx(tree.find_key("voice-orb").unwrap().rect.w, 120.0));
    }

    /// Nodes whose rect leaves `[0, width]`, skipping the contents of the
    /// horizontally scrolling quick-action row.
    fn horizontal_overflow(tree: &luna_ui::LayoutTree, width: f32) -> Vec<String> {
        let mut skip_below: Option<usize> = None;
        let mut out = Vec::new();
        for n in &tree.nodes {
            if let Some(depth) = skip_below {
                if n.depth > depth {
                    continue;
                }
                skip_below = None;
            }
            if n.key.as_deref() == Some("quick-actions-row") {
                skip_below = Some(n.depth);
            }
            if n.rect.x < -0.5 || n.rect.right() > width + 0.5 {
                out.push(format!("{} {:?} {:?}", n.kind, n.key, n.rect));
            }
        }
        out
    }

    #[test]
    fn narrow_phones_fit_every_section() {
        for width in [320.0, 360.0, 419.0, 420.0] {
            let ctx = Locals::new(Theme::light(), Viewport::new(width, 700.0));
            let tree = laid_out(&ctx);
            let overflow = horizontal_overflow(&tree, width);
            assert!(overflow.is_empty(), "width {width}: {overflow:?}");
        }
    }

    #[test]
    fn hero_stats_shrink_inside_the_hero_on_small_screens() {
        let ctx = Locals::new(Theme::dark(), Viewport::new(320.0, 700.0));
        let tree = laid_out(&ctx);
        let hero = tree.find_key("hero").unwrap().rect;
        let first = tree.find_key("Response time").unwrap().rect;
        let second = tree.find_key("Private").unwrap().rect;
        assert!(second.right() <= hero.right() - 20.0 + 0.5);
        assert!(approx(first.w, second.w));
        assert!(first.w < 147.0);
    }

    #[test]
    fn hero_stats_share_the_row() {
        let tree = laid_out(&Locals::default());
        let a = tree.find_key("Response time").unwrap().rect;
        let b = tree.find_key("Private").unwrap().rect;
        assert!(approx(a.w, b.w));
        assert!(approx(a.y, b.y));
    }

    #[test]
    fn input_bar_sits_on_the_bottom_edge() {
        let ctx = Locals::default();
        let bar = laid_out(&ctx).find_key("chat-input").unwrap().rect;
        assert!(approx(bar.bottom(), ctx.viewport.height));
        assert!(approx(bar.w, ctx.viewport.width));
    }

    #[test]
    fn ios_keyboard_lifts_the_input_bar() {
        let ctx = Locals::default()
            .with_platform(Platform::Ios)
            .with_keyboard_height(300.0);
        let bar = laid_out(&ctx).find_key("chat-input").unwrap().rect;
        assert!(approx(bar.bottom(), ctx.viewport.height - 300.0));
    }

    #[test]
    fn android_leaves_the_input_bar_to_the_window() {
        let ctx = Locals::default()
            .with_platform(Platform::Android)
            .with_keyboard_height(300.0);
        let bar = laid_out(&ctx).find_key("chat-input").unwrap().rect;
        assert!(approx(bar.bottom(), ctx.viewport.height));
    }

    #[test]
    fn scroll_viewport_sits_between_header_and_bottom() {
        let ctx = Locals::default();
        let tree = laid_out(&ctx);
        let header = tree.find_key("header").unwrap().rect;
        let scroll = tree.find_key("home-scroll").unwrap().rect;
        assert!(approx(scroll.y, header.bottom()));
        assert!(approx(scroll.bottom(), ctx.viewport.height));
        let content = tree.find_key("home-content").unwrap().rect;
        assert!(content.h > scroll.h, "content scrolls");
    }
}
