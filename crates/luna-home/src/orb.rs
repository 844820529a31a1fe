use luna_core::*;
use luna_ui::*;

use crate::tokens::{ORB_GRADIENT, ShadowPreset};

/// Sizes of the voice orb discs and its microphone glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoiceOrbMetrics {
    pub outer: f32,
    pub inner: f32,
    pub glyph: f32,
}

impl VoiceOrbMetrics {
    pub const COMPACT: VoiceOrbMetrics = VoiceOrbMetrics {
        outer: 120.0,
        inner: 90.0,
        glyph: 28.0,
    };
    pub const REGULAR: VoiceOrbMetrics = VoiceOrbMetrics {
        outer: 140.0,
        inner: 105.0,
        glyph: 32.0,
    };

    pub const fn for_compact(compact: bool) -> Self {
        if compact { Self::COMPACT } else { Self::REGULAR }
    }
}

/// Gradient disc with an inner disc and a microphone glyph.
pub fn VoiceOrb(theme: &Theme, compact: bool) -> View {
    let m = VoiceOrbMetrics::for_compact(compact);
    let inner_bg = theme.pick(
        theme.palette.secondary.with_opacity(0.8),
        theme.palette.primary.with_opacity(0.9),
    );

    Box(Modifier::new()
        .size(m.outer, m.outer)
        .flex_shrink(0.0)
        .margin_left(12.0)
        .background_brush(LinearGradient::diagonal(&ORB_GRADIENT))
        .clip_rounded(ROUNDED_FULL)
        .shadow(ShadowPreset::Medium.shadow())
        .align_items(AlignItems::Center)
        .justify_content(JustifyContent::Center))
    .key("voice-orb")
    .semantics(Semantics::new(Role::Button).label("Start voice mode"))
    .child(
        Box(Modifier::new()
            .size(m.inner, m.inner)
            .background(inner_bg)
            .clip_rounded(ROUNDED_FULL)
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::Center))
        .child(Icon(IconKey::Mic, m.glyph).tint(theme.palette.text)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_size(v: &View) -> Option<f32> {
        v.walk().find_map(|n| match n.kind {
            ViewKind::Icon { size, .. } => Some(size),
            _ => None,
        })
    }

    #[test]
    fn presets() {
        let c = VoiceOrb(&Theme::light(), true);
        assert_eq!(c.modifier.size.map(|s| (s.width, s.height)), Some((120.0, 120.0)));
        assert_eq!(
            c.children[0].modifier.size.map(|s| (s.width, s.height)),
            Some((90.0, 90.0))
        );
        assert_eq!(icon_size(&c), Some(28.0));

        let r = VoiceOrb(&Theme::light(), false);
        assert_eq!(r.modifier.size.map(|s| (s.width, s.height)), Some((140.0, 140.0)));
        assert_eq!(
            r.children[0].modifier.size.map(|s| (s.width, s.height)),
            Some((105.0, 105.0))
        );
        assert_eq!(icon_size(&r), Some(32.0));
    }

    #[test]
    fn gradient_ignores_theme() {
        let light = VoiceOrb(&Theme::light(), false);
        let dark = VoiceOrb(&Theme::dark(), false);
        let stops = |v: &View| v.modifier.background.as_ref().map(|b| b.stops().to_vec());
        assert_eq!(stops(&light), Some(ORB_GRADIENT.to_vec()));
        assert_eq!(stops(&light), stops(&dark));
        assert_ne!(light.children[0].modifier.background, dark.children[0].modifier.background);
    }
}
