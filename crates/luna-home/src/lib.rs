#![allow(non_snake_case)]
//! Luna's mobile home screen.
//!
//! ```rust
//! use luna_core::{Locals, Theme, Viewport};
//! use luna_home::HomeScreen;
//!
//! let locals = Locals::new(Theme::dark(), Viewport::new(375.0, 812.0));
//! let view = HomeScreen(&locals);
//! assert!(view.find_key("voice-orb").is_some());
//! ```

pub mod cells;
pub mod chrome;
pub mod config;
pub mod content;
pub mod orb;
pub mod screen;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, PaletteOverride, ThemeConfig};
pub use orb::{VoiceOrb, VoiceOrbMetrics};
pub use screen::HomeScreen;
