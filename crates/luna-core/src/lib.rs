//! # View model
//!
//! Luna screens are plain functions from an explicit [`Locals`] context to a
//! [`View`] tree. Nothing here holds state between frames:
//!
//! - [`View`] / [`ViewKind`]: the declarative tree, with optional stable
//!   keys for list items.
//! - [`Modifier`]: sizing, flex, padding, backgrounds and shadows.
//! - [`Brush`]: solid or multi-stop linear gradient fills.
//! - [`IconKey`]: the closed glyph vocabulary.
//! - [`Locals`]: theme, viewport, platform and keyboard height.
//!
//! ```rust
//! use luna_core::*;
//!
//! let card = View::new(0, ViewKind::Column)
//!     .key("greeting")
//!     .modifier(Modifier::new().padding(16.0).background(Color::WHITE));
//! assert_eq!(card.key.as_deref(), Some("greeting"));
//! ```
//!
//! Layout and paint live in `luna-ui`; this crate has no notion of pixels on
//! screen beyond the numbers stored in modifiers.

pub mod color;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod semantics;
pub mod view;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use icon::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use semantics::*;
pub use view::*;
