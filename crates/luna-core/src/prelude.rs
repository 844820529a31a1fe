pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::error::UiError;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::icon::IconKey;
pub use crate::locals::{
    COMPACT_BREAKPOINT, LayoutMode, Locals, Palette, Platform, Theme, Viewport,
};
pub use crate::modifier::{Modifier, PaddingValues, ROUNDED_FULL, Shadow};
pub use crate::semantics::{Role, Semantics};
pub use crate::view::{FontWeight, Scene, SceneNode, View, ViewId, ViewKind};
pub use taffy::{AlignItems, FlexWrap, JustifyContent};
