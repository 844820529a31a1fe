//! Taffy-backed layout pass.
//!
//! [`layout`] turns a `View` tree into a [`LayoutTree`]: one [`LayoutNode`]
//! per view, in pre-order, each with an absolute rect in logical units. Leaf
//! kinds (`Text`, `Icon`, `TextField`) are measured intrinsically and any
//! children attached to them are ignored by both layout and paint.

use luna_core::{Modifier, PositionType, Rect, Size, UiError, View, ViewId, ViewKind};
use taffy::prelude::{auto, length, percent, zero};
use taffy::{AlignItems, AvailableSpace, Display, FlexDirection, NodeId, Overflow, Point, Position};
use taffy::{Style, TaffyTree};

use crate::text;

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    /// 1-based position in pre-order.
    pub id: ViewId,
    pub key: Option<String>,
    pub kind: &'static str,
    pub rect: Rect,
    pub depth: usize,
    /// Wrapped display lines for text nodes, empty otherwise.
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LayoutTree {
    pub viewport: Size,
    pub nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn root(&self) -> Option<&LayoutNode> {
        self.nodes.first()
    }

    pub fn node(&self, id: ViewId) -> Option<&LayoutNode> {
        let idx = usize::try_from(id.checked_sub(1)?).ok()?;
        self.nodes.get(idx)
    }

    pub fn find_key(&self, key: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.key.as_deref() == Some(key))
    }

    /// Direct children of `id`, in order.
    pub fn children_of(&self, id: ViewId) -> Vec<&LayoutNode> {
        let Some(parent) = self.node(id) else {
            return Vec::new();
        };
        self.nodes
            .iter()
            .skip(id as usize)
            .take_while(|n| n.depth > parent.depth)
            .filter(|n| n.depth == parent.depth + 1)
            .collect()
    }

    /// Lowest edge of any node; the scrollable content height.
    pub fn content_bottom(&self) -> f32 {
        self.nodes.iter().map(|n| n.rect.bottom()).fold(0.0, f32::max)
    }
}

enum NodeCtx {
    Text {
        text: String,
        font_size: f32,
        letter_spacing: f32,
        soft_wrap: bool,
    },
    Icon {
        size: f32,
    },
    TextField,
    Container,
}

fn layout_err(e: taffy::TaffyError) -> UiError {
    UiError::Layout(e.to_string())
}

fn display_text(kind: &ViewKind) -> Option<String> {
    match kind {
        ViewKind::Text {
            text, uppercase, ..
        } => Some(if *uppercase {
            text.to_uppercase()
        } else {
            text.clone()
        }),
        _ => None,
    }
}

fn direction_of(kind: &ViewKind) -> FlexDirection {
    match kind {
        ViewKind::Row | ViewKind::Box | ViewKind::ScrollH => FlexDirection::Row,
        _ => FlexDirection::Column,
    }
}

fn style_from_modifier(m: &Modifier, kind: &ViewKind, parent: Option<FlexDirection>) -> Style {
    let mut s = Style {
        display: Display::Flex,
        flex_direction: direction_of(kind),
        ..Style::default()
    };

    s.align_items = if kind.is_container() {
        Some(AlignItems::Stretch)
    } else {
        Some(AlignItems::FlexStart)
    };
    if let Some(a) = m.align_items_container {
        s.align_items = Some(a);
    }
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(w) = m.flex_wrap {
        s.flex_wrap = w;
    }
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(sh) = m.flex_shrink {
        s.flex_shrink = sh;
    }
    if let Some(b) = m.flex_basis {
        s.flex_basis = length(b.max(0.0));
    }

    s.gap = taffy::Size {
        width: length(m.column_gap.unwrap_or(0.0)),
        height: length(m.row_gap.unwrap_or(0.0)),
    };

    if let Some(PositionType::Absolute) = m.position_type {
        s.position = Position::Absolute;
        s.inset = taffy::Rect {
            left: m.offset_left.map(|v| length(v)).unwrap_or_else(auto),
            right: m.offset_right.map(|v| length(v)).unwrap_or_else(auto),
            top: m.offset_top.map(|v| length(v)).unwrap_or_else(auto),
            bottom: m.offset_bottom.map(|v| length(v)).unwrap_or_else(auto),
        };
    }

    s.margin = taffy::Rect {
        left: m.margin_left.map(|v| length(v)).unwrap_or_else(zero),
        right: m.margin_right.map(|v| length(v)).unwrap_or_else(zero),
        top: m.margin_top.map(|v| length(v)).unwrap_or_else(zero),
        bottom: m.margin_bottom.map(|v| length(v)).unwrap_or_else(zero),
    };

    // Scroll viewports never grow to fit their content.
    if matches!(kind, ViewKind::ScrollV | ViewKind::ScrollH) {
        s.overflow = Point {
            x: Overflow::Hidden,
            y: Overflow::Hidden,
        };
    }

    if let Some(pv) = m.padding_values {
        s.padding = taffy::Rect {
            left: length(pv.left),
            right: length(pv.right),
            top: length(pv.top),
            bottom: length(pv.bottom),
        };
    } else if let Some(p) = m.padding {
        s.padding = taffy::Rect {
            left: length(p),
            right: length(p),
            top: length(p),
            bottom: length(p),
        };
    }

    // Explicit size wins over fill.
    let mut width_set = false;
    let mut height_set = false;
    if let Some(sz) = m.size {
        if sz.width.is_finite() {
            s.size.width = length(sz.width.max(0.0));
            width_set = true;
        }
        if sz.height.is_finite() {
            s.size.height = length(sz.height.max(0.0));
            height_set = true;
        }
    }
    if let Some(w) = m.width {
        s.size.width = length(w.max(0.0));
        width_set = true;
    }
    if let Some(h) = m.height {
        s.size.height = length(h.max(0.0));
        height_set = true;
    }

    // Fill along the parent's main axis is a weight (flex: 1 1 0), fill
    // along its cross axis is 100%.
    let want_fill_w = (m.fill_max || m.fill_max_w) && !width_set;
    let want_fill_h = m.fill_max && !height_set;
    let parent_is_row = matches!(parent, Some(FlexDirection::Row));
    let parent_is_column = matches!(parent, Some(FlexDirection::Column));
    if want_fill_w {
        if parent_is_row {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.width = length(0.0);
        } else {
            s.size.width = percent(1.0);
        }
    }
    if want_fill_h {
        if parent_is_column {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.height = length(0.0);
        } else {
            s.size.height = percent(1.0);
        }
    }

    if let Some(v) = m.min_width {
        s.min_size.width = length(v.max(0.0));
    }

    s
}

fn build_node(
    v: &View,
    parent: Option<FlexDirection>,
    t: &mut TaffyTree<NodeCtx>,
    order: &mut Vec<NodeId>,
) -> Result<NodeId, taffy::TaffyError> {
    let style = style_from_modifier(&v.modifier, &v.kind, parent);
    let slot = order.len();
    // Placeholder keeps pre-order positions; overwritten below.
    order.push(NodeId::from(0u64));

    let node = match &v.kind {
        ViewKind::Text {
            font_size,
            letter_spacing,
            soft_wrap,
            ..
        } => t.new_leaf_with_context(
            style,
            NodeCtx::Text {
                text: display_text(&v.kind).unwrap_or_default(),
                font_size: *font_size,
                letter_spacing: *letter_spacing,
                soft_wrap: *soft_wrap,
            },
        )?,
        ViewKind::Icon { size, .. } => {
            t.new_leaf_with_context(style, NodeCtx::Icon { size: *size })?
        }
        ViewKind::TextField { .. } => t.new_leaf_with_context(style, NodeCtx::TextField)?,
        _ => {
            let dir = Some(direction_of(&v.kind));
            let children = v
                .children
                .iter()
                .map(|c| build_node(c, dir, t, order))
                .collect::<Result<Vec<_>, _>>()?;
            let n = t.new_with_children(style, &children)?;
            t.set_node_context(n, Some(NodeCtx::Container))?;
            n
        }
    };
    order[slot] = node;
    Ok(node)
}

fn measure(
    known: taffy::Size<Option<f32>>,
    avail: taffy::Size<AvailableSpace>,
    ctx: Option<&mut NodeCtx>,
) -> taffy::Size<f32> {
    match ctx {
        Some(NodeCtx::Text {
            text,
            font_size,
            letter_spacing,
            soft_wrap,
        }) => {
            let full = text::measure_width(text, *font_size, *letter_spacing);
            let width = match (known.width, avail.width) {
                (Some(w), _) => w,
                (None, AvailableSpace::Definite(w)) if *soft_wrap => full.min(w),
                (None, AvailableSpace::MinContent) if *soft_wrap => {
                    text::min_content_width(text, *font_size, *letter_spacing)
                }
                _ => full,
            };
            let lines = if *soft_wrap {
                text::wrap_lines(text, *font_size, *letter_spacing, width).len()
            } else {
                1
            };
            taffy::Size {
                width,
                height: known
                    .height
                    .unwrap_or(text::line_height(*font_size) * lines.max(1) as f32),
            }
        }
        Some(NodeCtx::Icon { size }) => taffy::Size {
            width: known.width.unwrap_or(*size),
            height: known.height.unwrap_or(*size),
        },
        Some(NodeCtx::TextField) => taffy::Size {
            width: known.width.unwrap_or(220.0),
            height: known.height.unwrap_or(44.0),
        },
        Some(NodeCtx::Container) | None => taffy::Size {
            width: known.width.unwrap_or(0.0),
            height: known.height.unwrap_or(0.0),
        },
    }
}

fn collect(
    v: &View,
    t: &TaffyTree<NodeCtx>,
    order: &mut std::slice::Iter<'_, NodeId>,
    origin: (f32, f32),
    depth: usize,
    out: &mut Vec<LayoutNode>,
) -> Result<(), UiError> {
    let node = *order
        .next()
        .ok_or_else(|| UiError::Layout("view tree changed during layout".into()))?;
    let l = t.layout(node).map_err(layout_err)?;
    let rect = Rect {
        x: origin.0 + l.location.x,
        y: origin.1 + l.location.y,
        w: l.size.width,
        h: l.size.height,
    };

    let lines = match &v.kind {
        ViewKind::Text {
            font_size,
            letter_spacing,
            soft_wrap,
            ..
        } => {
            let shown = display_text(&v.kind).unwrap_or_default();
            if *soft_wrap {
                text::wrap_lines(&shown, *font_size, *letter_spacing, rect.w)
            } else {
                vec![shown]
            }
        }
        _ => Vec::new(),
    };

    out.push(LayoutNode {
        id: out.len() as ViewId + 1,
        key: v.key.clone(),
        kind: v.kind.name(),
        rect,
        depth,
        lines,
    });

    if v.kind.is_container() {
        for c in &v.children {
            collect(c, t, order, (rect.x, rect.y), depth + 1, out)?;
        }
    }
    Ok(())
}

/// Lays `root` out into a `viewport`-sized box.
pub fn layout(root: &View, viewport: Size) -> Result<LayoutTree, UiError> {
    if !(viewport.width.is_finite() && viewport.height.is_finite())
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        log::warn!(
            "layout requested for degenerate viewport {}x{}",
            viewport.width,
            viewport.height
        );
    }
    let w = if viewport.width.is_finite() { viewport.width.max(0.0) } else { 0.0 };
    let h = if viewport.height.is_finite() { viewport.height.max(0.0) } else { 0.0 };

    let mut t: TaffyTree<NodeCtx> = TaffyTree::new();
    let mut order = Vec::new();
    let root_node = build_node(root, None, &mut t, &mut order).map_err(layout_err)?;

    let mut rs = t.style(root_node).map_err(layout_err)?.clone();
    rs.size = taffy::Size {
        width: length(w),
        height: length(h),
    };
    t.set_style(root_node, rs).map_err(layout_err)?;

    let available = taffy::Size {
        width: AvailableSpace::Definite(w),
        height: AvailableSpace::Definite(h),
    };
    t.compute_layout_with_measure(root_node, available, |known, avail, _node, ctx, _style| {
        measure(known, avail, ctx)
    })
    .map_err(layout_err)?;

    let mut nodes = Vec::with_capacity(order.len());
    collect(root, &t, &mut order.iter(), (0.0, 0.0), 0, &mut nodes)?;
    log::trace!("laid out {} nodes in {}x{}", nodes.len(), w, h);

    Ok(LayoutTree {
        viewport: Size {
            width: w,
            height: h,
        },
        nodes,
    })
}
