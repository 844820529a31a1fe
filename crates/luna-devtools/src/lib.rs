//! Developer tools: a view-tree inspector and frame metrics.
//!
//! The inspector flattens a `View` (optionally paired with its
//! `LayoutTree`) into [`InspectorNode`]s that can be printed as an indented
//! tree or serialized to JSON.

use serde::Serialize;
use web_time::Instant;

use luna_core::{Brush, View, ViewKind};
use luna_ui::LayoutTree;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InspectorNode {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<[f32; 4]>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<InspectorNode>,
}

fn detail(kind: &ViewKind) -> Option<String> {
    match kind {
        ViewKind::Text {
            text,
            font_size,
            uppercase,
            ..
        } => {
            let shown = if *uppercase {
                text.to_uppercase()
            } else {
                text.clone()
            };
            Some(format!("{shown:?} @{font_size}"))
        }
        ViewKind::Icon { icon, size, .. } => Some(format!("{icon} @{size}")),
        ViewKind::TextField { hint } => Some(format!("hint={hint:?}")),
        _ => None,
    }
}

fn background(v: &View) -> Option<Vec<String>> {
    v.modifier.background.as_ref().map(|b| match b {
        Brush::Solid(c) => vec![c.to_hex()],
        Brush::Linear { stops, .. } => stops.iter().map(|c| c.to_hex()).collect(),
    })
}

#[derive(Default)]
pub struct Inspector {
    pub show_rects: bool,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rects(mut self, on: bool) -> Self {
        self.show_rects = on;
        self
    }

    pub fn snapshot(&self, root: &View, layout: Option<&LayoutTree>) -> InspectorNode {
        let mut rects = layout
            .filter(|_| self.show_rects)
            .map(|l| l.nodes.iter().map(|n| n.rect));
        let snap = Self::node(root, &mut rects);
        if rects.is_some_and(|mut it| it.next().is_some()) {
            log::warn!("layout has more nodes than the inspected view");
        }
        snap
    }

    fn node(
        v: &View,
        rects: &mut Option<impl Iterator<Item = luna_core::Rect>>,
    ) -> InspectorNode {
        let rect = rects
            .as_mut()
            .and_then(|it| it.next())
            .map(|r| [r.x, r.y, r.w, r.h]);
        // Layout skips the children of leaf views; mirror that here.
        let children = if v.kind.is_container() {
            v.children.iter().map(|c| Self::node(c, rects)).collect()
        } else {
            Vec::new()
        };
        InspectorNode {
            kind: v.kind.name(),
            key: v.key.clone(),
            detail: detail(&v.kind),
            background: background(v),
            rect,
            children,
        }
    }

    /// Indented, one node per line.
    pub fn dump_tree(&self, root: &View, layout: Option<&LayoutTree>) -> String {
        fn write(out: &mut String, n: &InspectorNode, depth: usize) {
            out.push_str(&"  ".repeat(depth));
            out.push_str(n.kind);
            if let Some(k) = &n.key {
                out.push_str(&format!(" #{k}"));
            }
            if let Some(d) = &n.detail {
                out.push_str(&format!(" {d}"));
            }
            if let Some(bg) = &n.background {
                out.push_str(&format!(" bg={}", bg.join("→")));
            }
            if let Some([x, y, w, h]) = n.rect {
                out.push_str(&format!(" [{x:.0},{y:.0} {w:.0}x{h:.0}]"));
            }
            out.push('\n');
            for c in &n.children {
                write(out, c, depth + 1);
            }
        }
        let snap = self.snapshot(root, layout);
        let mut out = String::new();
        write(&mut out, &snap, 0);
        out
    }

    pub fn dump_json(
        &self,
        root: &View,
        layout: Option<&LayoutTree>,
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.snapshot(root, layout))
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Metrics {
    pub build_ms: f32,
    pub layout_ms: f32,
    pub view_nodes: usize,
    pub scene_nodes: usize,
}

/// Measures consecutive phases of one frame.
pub struct FrameTimer {
    last: Instant,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::start()
    }
}

impl FrameTimer {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Milliseconds since the previous lap (or start).
    pub fn lap_ms(&mut self) -> f32 {
        let now = Instant::now();
        let ms = (now - self.last).as_secs_f32() * 1000.0;
        self.last = now;
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luna_core::{Color, IconKey, LinearGradient, Modifier, Size};
    use luna_ui::*;

    fn sample() -> View {
        Column(Modifier::new().background_brush(LinearGradient::diagonal(&[
            Color::BLACK,
            Color::WHITE,
        ])))
        .child((
            Text("hello").key("greeting"),
            Icon(IconKey::Mic, 28.0),
        ))
    }

    #[test]
    fn tree_dump_lists_every_node() {
        let dump = Inspector::new().dump_tree(&sample(), None);
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Column bg=#000000→#FFFFFF");
        assert_eq!(lines[1], "  Text #greeting \"hello\" @16");
        assert_eq!(lines[2], "  Icon Mic @28");
    }

    #[test]
    fn rects_follow_layout_order() {
        let view = sample();
        let tree = luna_ui::layout(
            &view,
            Size {
                width: 100.0,
                height: 200.0,
            },
        )
        .unwrap();
        let snap = Inspector::new().with_rects(true).snapshot(&view, Some(&tree));
        assert_eq!(snap.rect, Some([0.0, 0.0, 100.0, 200.0]));
        assert_eq!(snap.children.len(), 2);
        assert!(snap.children.iter().all(|c| c.rect.is_some()));
    }

    #[test]
    fn json_skips_empty_fields() {
        let json = Inspector::new().dump_json(&Text("x"), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "Text");
        assert!(value.get("children").is_none());
        assert!(value.get("rect").is_none());
    }

    #[test]
    fn frame_timer_laps_are_non_negative() {
        let mut t = FrameTimer::start();
        assert!(t.lap_ms() >= 0.0);
    }
}
