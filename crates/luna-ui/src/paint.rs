use luna_core::{Brush, Color, Rect, Scene, SceneNode, View, ViewKind};

use crate::layout::{LayoutNode, LayoutTree};
use crate::text;

const HINT_COLOR: Color = Color::from_rgb(0x9C, 0xA3, 0xAF);

/// Emits draw commands for `root` using rects from a matching `layout`.
///
/// Children paint in tree order, so later siblings (overlays such as an
/// absolutely positioned input bar) end up on top.
pub fn paint(root: &View, layout: &LayoutTree) -> Scene {
    let clear_color = match &root.modifier.background {
        Some(Brush::Solid(c)) => *c,
        _ => Color::TRANSPARENT,
    };
    let mut scene = Scene {
        clear_color,
        nodes: Vec::new(),
    };
    let mut nodes = layout.nodes.iter();
    paint_view(root, &mut nodes, &mut scene);
    scene
}

fn resolve_radius(radius: f32, rect: Rect) -> f32 {
    radius.min(rect.w.min(rect.h) / 2.0).max(0.0)
}

fn paint_view<'a>(
    v: &View,
    nodes: &mut impl Iterator<Item = &'a LayoutNode>,
    scene: &mut Scene,
) {
    let Some(node) = nodes.next() else {
        return;
    };
    let m = &v.modifier;
    let rect = node.rect;
    let radius = resolve_radius(m.clip_rounded.unwrap_or(0.0), rect);

    if let Some(alpha) = m.alpha {
        scene.nodes.push(SceneNode::PushAlpha { alpha });
    }
    if let Some(shadow) = m.shadow {
        scene.nodes.push(SceneNode::Shadow {
            rect,
            shadow,
            radius,
        });
    }
    if let Some(brush) = &m.background {
        scene.nodes.push(SceneNode::Rect {
            rect,
            brush: brush.clone(),
            radius,
        });
    }

    match &v.kind {
        ViewKind::Text {
            color,
            font_size,
            weight,
            ..
        } => {
            let lh = text::line_height(*font_size);
            for (i, line) in node.lines.iter().enumerate() {
                scene.nodes.push(SceneNode::Text {
                    rect: Rect {
                        x: rect.x,
                        y: rect.y + lh * i as f32,
                        w: rect.w,
                        h: lh,
                    },
                    text: line.clone(),
                    color: *color,
                    size: *font_size,
                    weight: *weight,
                });
            }
        }
        ViewKind::Icon { icon, size, color } => scene.nodes.push(SceneNode::Icon {
            rect,
            icon: *icon,
            color: *color,
            size: *size,
        }),
        ViewKind::TextField { hint } => scene.nodes.push(SceneNode::Text {
            rect,
            text: hint.clone(),
            color: HINT_COLOR,
            size: 16.0,
            weight: Default::default(),
        }),
        _ => {}
    }

    if v.kind.is_container() {
        let clips = matches!(v.kind, ViewKind::ScrollV | ViewKind::ScrollH)
            || m.clip_rounded.is_some();
        if clips {
            scene.nodes.push(SceneNode::PushClip { rect, radius });
        }
        for c in &v.children {
            paint_view(c, nodes, scene);
        }
        if clips {
            scene.nodes.push(SceneNode::PopClip);
        }
    }

    if m.alpha.is_some() {
        scene.nodes.push(SceneNode::PopAlpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use luna_core::{IconKey, LinearGradient, Modifier, ROUNDED_FULL, Size};

    fn scene_for(root: &View) -> Scene {
        let tree = layout(
            root,
            Size {
                width: 200.0,
                height: 400.0,
            },
        )
        .unwrap();
        paint(root, &tree)
    }

    #[test]
    fn gradient_background_reaches_the_scene() {
        let stops = [Color::BLACK, Color::WHITE];
        let root = Column(Modifier::new().background(Color::WHITE)).child(
            Box(Modifier::new()
                .height(50.0)
                .background_brush(LinearGradient::diagonal(&stops))
                .clip_rounded(24.0)),
        );
        let scene = scene_for(&root);
        assert_eq!(scene.clear_color, Color::WHITE);

        let gradient = scene.nodes.iter().find_map(|n| match n {
            SceneNode::Rect {
                brush: Brush::Linear { stops, .. },
                radius,
                ..
            } => Some((stops.to_vec(), *radius)),
            _ => None,
        });
        assert_eq!(gradient, Some((stops.to_vec(), 24.0)));
    }

    #[test]
    fn full_rounding_resolves_to_half_the_short_side() {
        let root = Column(Modifier::new()).child(
            Box(Modifier::new()
                .size(36.0, 36.0)
                .background(Color::BLACK)
                .clip_rounded(ROUNDED_FULL)),
        );
        let radius = scene_for(&root).nodes.iter().find_map(|n| match n {
            SceneNode::Rect { radius, .. } => Some(*radius),
            _ => None,
        });
        assert_eq!(radius, Some(18.0));
    }

    #[test]
    fn scroll_areas_clip_and_overlays_paint_last() {
        let root = Column(Modifier::new()).child((
            ScrollArea(
                Modifier::new().fill_max_size(),
                Column(Modifier::new()).child(Text("body")),
            ),
            TextField("Ask anything"),
        ));
        let scene = scene_for(&root);

        assert!(matches!(scene.nodes.first(), Some(SceneNode::PushClip { .. })));
        match scene.nodes.last() {
            Some(SceneNode::Text { text, color, .. }) => {
                assert_eq!(text, "Ask anything");
                assert_eq!(*color, HINT_COLOR);
            }
            other => panic!("unexpected last node {other:?}"),
        }
    }

    #[test]
    fn icons_and_alpha_are_balanced() {
        let root = Column(Modifier::new())
            .child(Box(Modifier::new().alpha(0.8)).child(Icon(IconKey::Bell, 16.0)));
        let scene = scene_for(&root);
        let kinds: Vec<_> = scene
            .nodes
            .iter()
            .map(|n| match n {
                SceneNode::PushAlpha { .. } => "push",
                SceneNode::PopAlpha => "pop",
                SceneNode::Icon { .. } => "icon",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["push", "icon", "pop"]);
    }
}
