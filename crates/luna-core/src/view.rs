use std::borrow::Cow;

use crate::{Brush, Color, IconKey, Modifier, Rect, Shadow};

pub type ViewId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    SemiBold,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    /// Vertical scroll viewport; the platform owns the offset.
    ScrollV,
    /// Horizontal scroll viewport; the platform owns the offset.
    ScrollH,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        weight: FontWeight,
        letter_spacing: f32,
        uppercase: bool,
        soft_wrap: bool,
    },
    Icon {
        icon: IconKey,
        size: f32,
        color: Color,
    },
    /// Text entry whose value lives in the control itself.
    TextField {
        hint: String,
    },
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Surface => "Surface",
            ViewKind::Box => "Box",
            ViewKind::Row => "Row",
            ViewKind::Column => "Column",
            ViewKind::ScrollV => "ScrollV",
            ViewKind::ScrollH => "ScrollH",
            ViewKind::Text { .. } => "Text",
            ViewKind::Icon { .. } => "Icon",
            ViewKind::TextField { .. } => "TextField",
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(
            self,
            ViewKind::Text { .. } | ViewKind::Icon { .. } | ViewKind::TextField { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    /// Stable identity among siblings, used for list diffing.
    pub key: Option<String>,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            key: None,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Pre-order traversal of this view and all descendants.
    pub fn walk(&self) -> impl Iterator<Item = &View> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let v = stack.pop()?;
            stack.extend(v.children.iter().rev());
            Some(v)
        })
    }

    /// First descendant (or self) carrying `key`.
    pub fn find_key(&self, key: &str) -> Option<&View> {
        self.walk().find(|v| v.key.as_deref() == Some(key))
    }

    /// Displayed strings of every text node, in tree order.
    pub fn texts(&self) -> Vec<Cow<'_, str>> {
        self.walk()
            .filter_map(|v| match &v.kind {
                ViewKind::Text {
                    text, uppercase, ..
                } => Some(if *uppercase {
                    Cow::Owned(text.to_uppercase())
                } else {
                    Cow::Borrowed(text.as_str())
                }),
                _ => None,
            })
            .collect()
    }

    /// Icons in tree order.
    pub fn icons(&self) -> Vec<IconKey> {
        self.walk()
            .filter_map(|v| match v.kind {
                ViewKind::Icon { icon, .. } => Some(icon),
                _ => None,
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Shadow {
        rect: Rect,
        shadow: Shadow,
        radius: f32,
    },
    Rect {
        rect: Rect,
        brush: Brush,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        weight: FontWeight,
    },
    Icon {
        rect: Rect,
        icon: IconKey,
        color: Color,
        size: f32,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
    PushAlpha {
        alpha: f32,
    },
    PopAlpha,
}
