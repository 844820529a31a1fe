#![allow(non_snake_case)]
//! Widgets, layout and paint.

pub mod keyboard;
pub mod layout;
pub mod paint;
pub mod text;

use luna_core::*;
use taffy::FlexWrap;

pub use keyboard::{KeyboardAvoidance, KeyboardAvoidingView, KeyboardBehavior};
pub use layout::{LayoutNode, LayoutTree, layout};
pub use paint::paint;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// Row whose children wrap onto new lines when they run out of width.
pub fn FlowRow(modifier: Modifier) -> View {
    Row(modifier.flex_wrap(FlexWrap::Wrap))
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: Color::BLACK,
            font_size: 16.0,
            weight: FontWeight::Regular,
            letter_spacing: 0.0,
            uppercase: false,
            soft_wrap: true,
        },
    )
}

pub fn Icon(icon: IconKey, size: f32) -> View {
    View::new(
        0,
        ViewKind::Icon {
            icon,
            size,
            color: Color::BLACK,
        },
    )
    .semantics(Semantics::new(Role::Image).label(icon.name()))
}

pub fn TextField(hint: impl Into<String>) -> View {
    let hint = hint.into();
    View::new(0, ViewKind::TextField { hint: hint.clone() })
        .semantics(Semantics::new(Role::TextField).label(hint))
}

/// Vertical scroll viewport. `content` keeps its natural height and the
/// platform scrolls it inside the viewport.
pub fn ScrollArea(modifier: Modifier, content: View) -> View {
    View::new(0, ViewKind::ScrollV)
        .modifier(modifier)
        .with_children(vec![unshrinkable(content)])
}

/// Horizontal scroll viewport, see [`ScrollArea`].
pub fn HorizontalScrollArea(modifier: Modifier, content: View) -> View {
    View::new(0, ViewKind::ScrollH)
        .modifier(modifier)
        .with_children(vec![unshrinkable(content)])
}

fn unshrinkable(mut content: View) -> View {
    content.modifier.flex_shrink = Some(0.0);
    content
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// Method styling for `Text` views. No-ops on other kinds.
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, font_size: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn bold(self) -> View;
    fn semibold(self) -> View;
    fn letter_spacing(self, v: f32) -> View;
    fn uppercase(self) -> View;
    fn single_line(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, font_size: f32) -> View {
        if let ViewKind::Text {
            font_size: text_size,
            ..
        } = &mut self.kind
        {
            *text_size = font_size;
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }
    fn bold(self) -> View {
        self.weight(FontWeight::Bold)
    }
    fn semibold(self) -> View {
        self.weight(FontWeight::SemiBold)
    }
    fn letter_spacing(mut self, v: f32) -> View {
        if let ViewKind::Text { letter_spacing, .. } = &mut self.kind {
            *letter_spacing = v;
        }
        self
    }
    fn uppercase(mut self) -> View {
        if let ViewKind::Text { uppercase, .. } = &mut self.kind {
            *uppercase = true;
        }
        self
    }
    fn single_line(mut self) -> View {
        if let ViewKind::Text { soft_wrap, .. } = &mut self.kind {
            *soft_wrap = false;
        }
        self
    }
}

pub trait IconStyle {
    fn tint(self, c: Color) -> View;
}

impl IconStyle for View {
    fn tint(mut self, c: Color) -> View {
        if let ViewKind::Icon { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_style_only_touches_text() {
        let t = Text("hi").size(24.0).bold().color(Color::WHITE).uppercase();
        match t.kind {
            ViewKind::Text {
                font_size,
                weight,
                color,
                uppercase,
                ..
            } => {
                assert_eq!(font_size, 24.0);
                assert_eq!(weight, FontWeight::Bold);
                assert_eq!(color, Color::WHITE);
                assert!(uppercase);
            }
            _ => panic!("expected text"),
        }

        let b = Box(Modifier::new()).size(24.0);
        assert_eq!(b.kind, ViewKind::Box);
    }

    #[test]
    fn tuples_flatten_into_children() {
        let col = Column(Modifier::new()).child((
            Text("a"),
            vec![Text("b"), Text("c")],
            [Icon(IconKey::Bell, 16.0)],
        ));
        assert_eq!(col.children.len(), 4);
        assert_eq!(col.icons(), vec![IconKey::Bell]);
    }

    #[test]
    fn scroll_content_does_not_shrink() {
        let s = HorizontalScrollArea(Modifier::new(), Row(Modifier::new()));
        assert_eq!(s.kind, ViewKind::ScrollH);
        assert_eq!(s.children[0].modifier.flex_shrink, Some(0.0));
    }
}
