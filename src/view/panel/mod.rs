//! The settings panel.
//!
//! A collapsible sidebar form holding a draft copy of the article settings.
//! Edits touch only the draft; the draft reaches the committed store on an
//! explicit apply, and a dedicated reset restores both to the defaults.

pub mod layout;
mod mouse;
pub mod render;
pub mod state;

pub use layout::{PanelHit, PanelLayout};
pub use state::PanelState;
