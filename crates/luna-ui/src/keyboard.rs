//! Keyboard avoidance.
//!
//! When an on-screen keyboard is up, content anchored to the bottom of the
//! screen has to move above it. iOS leaves that to the app, so the container
//! pads its bottom edge by the keyboard height. Android resizes the window
//! itself (`adjustResize`), so the container adds nothing. Its 80-unit
//! offset stays on [`KeyboardAvoidance`] for hosts that configure the
//! window; it never reaches the view tree.

use luna_core::{Modifier, PaddingValues, Platform, View};

use crate::{Column, ViewExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardBehavior {
    /// Pad the bottom edge by the overlapping keyboard height.
    Padding,
    /// Leave resizing to the platform window.
    Unmanaged,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyboardAvoidance {
    pub behavior: KeyboardBehavior,
    /// Distance between the top of the screen and the top of this
    /// container. Subtracted from the keyboard overlap under `Padding`,
    /// otherwise only carried.
    pub vertical_offset: f32,
}

impl KeyboardAvoidance {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self {
                behavior: KeyboardBehavior::Padding,
                vertical_offset: 0.0,
            },
            Platform::Android => Self {
                behavior: KeyboardBehavior::Unmanaged,
                vertical_offset: 80.0,
            },
        }
    }

    /// Extra bottom padding for a keyboard of `keyboard_height`.
    pub fn bottom_inset(&self, keyboard_height: f32) -> f32 {
        match self.behavior {
            KeyboardBehavior::Padding => (keyboard_height - self.vertical_offset).max(0.0),
            KeyboardBehavior::Unmanaged => 0.0,
        }
    }
}

/// Column that keeps its bottom edge above the keyboard.
pub fn KeyboardAvoidingView(
    avoidance: KeyboardAvoidance,
    keyboard_height: f32,
    modifier: Modifier,
    child: View,
) -> View {
    let inset = avoidance.bottom_inset(keyboard_height);
    let mut padding = modifier.padding_values.unwrap_or(PaddingValues {
        left: modifier.padding.unwrap_or(0.0),
        right: modifier.padding.unwrap_or(0.0),
        top: modifier.padding.unwrap_or(0.0),
        bottom: modifier.padding.unwrap_or(0.0),
    });
    padding.bottom += inset;
    Column(modifier.padding_values(padding)).child(child)
}
