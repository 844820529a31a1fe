//! The home screen composer.
//!
//! [`HomeScreen`] is a pure function of [`Locals`]: it reads the dark flag
//! and viewport width, derives compact mode and hands both down to the
//! cells. Composing twice with the same context yields an equal tree.

use luna_core::*;
use luna_ui::*;

use crate::cells::{ActionCard, HighlightStat, Pill, PromptCard, SmallTile, SubText, ThemedText};
use crate::chrome::{AppTitle, BotSwitch, ChatInput, DrawerButton, Header};
use crate::content::{
    HERO_HEADLINE, HERO_HIGHLIGHTS, HERO_LABEL, HERO_PILLS, HERO_SUBTEXT, PROMPT_CARDS,
    PROMPTS_TITLE, QUICK_ACTIONS, QUICK_ACTIONS_CAPTION, QUICK_ACTIONS_TITLE, TILES_TITLE,
    UTILITY_TILES,
};
use crate::orb::VoiceOrb;
use crate::tokens::{
    INPUT_BAR_RESERVE, ITEM_SPACING, PAGE_PADDING, RADIUS_HERO, SECTION_SPACING, ShadowPreset,
    hero_gradient,
};

pub fn HomeScreen(locals: &Locals) -> View {
    let theme = &locals.theme;
    let compact = locals.is_compact();
    log::debug!(
        "composing home screen: width={} compact={} dark={}",
        locals.viewport.width,
        compact,
        theme.is_dark
    );

    let content = Column(Modifier::new()
        .padding_values(PaddingValues {
            left: PAGE_PADDING,
            right: PAGE_PADDING,
            top: 8.0,
            bottom: INPUT_BAR_RESERVE,
        })
        .row_gap(SECTION_SPACING))
    .key("home-content")
    .child((
        HeroBanner(theme, compact),
        QuickActionsSection(theme),
        PromptsSection(theme),
        TilesSection(theme),
    ));

    Surface(
        Modifier::new()
            .fill_max_size()
            .background(theme.palette.primary),
        KeyboardAvoidingView(
            KeyboardAvoidance::for_platform(locals.platform),
            locals.keyboard_height,
            Modifier::new().fill_max_size(),
            Column(Modifier::new().fill_max_size()).child((
                Header(
                    theme,
                    "",
                    vec![DrawerButton(theme), AppTitle(theme)],
                    vec![BotSwitch(theme)],
                ),
                ScrollArea(Modifier::new().fill_max_size(), content).key("home-scroll"),
                ChatInput(theme),
            )),
        ),
    )
    .key("home")
}

pub fn HeroBanner(theme: &Theme, compact: bool) -> View {
    let intro = Column(Modifier::new()
        .flex_grow(1.0)
        .flex_shrink(1.0)
        .min_width(0.0)
        .row_gap(8.0))
    .child((
        Text(HERO_LABEL)
            .size(12.0)
            .semibold()
            .letter_spacing(2.0)
            .uppercase()
            .color(theme.palette.highlight)
            .modifier(Modifier::new().alpha(0.8)),
        ThemedText(theme, HERO_HEADLINE).size(24.0).bold(),
        SubText(theme, HERO_SUBTEXT).size(14.0),
        FlowRow(Modifier::new().row_gap(8.0).margin_top(4.0))
            .key("hero-pills")
            .child(HERO_PILLS.iter().map(|p| Pill(theme, p)).collect::<Vec<_>>()),
    ));

    Column(Modifier::new()
        .padding(20.0)
        .background_brush(LinearGradient::diagonal(&hero_gradient(theme.is_dark)))
        .clip_rounded(RADIUS_HERO)
        .shadow(ShadowPreset::Large.shadow()))
    .key("hero")
    .child((
        Row(Modifier::new().align_items(AlignItems::Center)).child((intro, VoiceOrb(theme, compact))),
        Row(Modifier::new().margin_top(16.0).column_gap(ITEM_SPACING))
            .key("hero-stats")
            .child(
                HERO_HIGHLIGHTS
                    .iter()
                    .map(|h| HighlightStat(theme, h))
                    .collect::<Vec<_>>(),
            ),
    ))
}

fn SectionTitle(theme: &Theme, title: &str) -> View {
    ThemedText(theme, title).size(18.0).bold()
}

pub fn QuickActionsSection(theme: &Theme) -> View {
    let cards: Vec<View> = QUICK_ACTIONS.iter().map(|a| ActionCard(theme, a)).collect();

    Column(Modifier::new().row_gap(ITEM_SPACING))
        .key("quick-actions")
        .child((
            Row(Modifier::new()
                .align_items(AlignItems::Center)
                .justify_content(JustifyContent::SpaceBetween)
                .column_gap(8.0))
            .child((
                SectionTitle(theme, QUICK_ACTIONS_TITLE),
                SubText(theme, QUICK_ACTIONS_CAPTION).size(12.0).single_line(),
            )),
            HorizontalScrollArea(
                Modifier::new()
                    .margin_horizontal(-PAGE_PADDING)
                    .padding_values(PaddingValues::symmetric(PAGE_PADDING, 4.0)),
                Row(Modifier::new()
                    .column_gap(ITEM_SPACING)
                    .padding_values(PaddingValues {
                        right: ITEM_SPACING,
                        ..PaddingValues::default()
                    }))
                .child(cards),
            )
            .key("quick-actions-row"),
        ))
}

pub fn PromptsSection(theme: &Theme) -> View {
    Column(Modifier::new().row_gap(ITEM_SPACING))
        .key("prompts")
        .child((
            SectionTitle(theme, PROMPTS_TITLE),
            Column(Modifier::new().row_gap(ITEM_SPACING))
                .key("prompt-list")
                .child(
                    PROMPT_CARDS
                        .iter()
                        .map(|p| PromptCard(theme, p))
                        .collect::<Vec<_>>(),
                ),
        ))
}

pub fn TilesSection(theme: &Theme) -> View {
    Column(Modifier::new().row_gap(ITEM_SPACING).margin_bottom(8.0))
        .key("tiles")
        .child((
            SectionTitle(theme, TILES_TITLE),
            FlowRow(Modifier::new().gap(ITEM_SPACING))
                .key("tile-grid")
                .child(
                    UTILITY_TILES
                        .iter()
                        .map(|t| SmallTile(theme, t))
                        .collect::<Vec<_>>(),
                ),
        ))
}
