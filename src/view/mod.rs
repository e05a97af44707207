//! Rendering: the article surface and the settings panel.

pub mod panel;
pub mod surface;
