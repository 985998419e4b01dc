//! User interface components for the slide deck presenter
//!
//! This crate provides the egui side of the deck: theming, font setup, the
//! slide frame, the navigation bar and the slide transition.

pub mod fonts;
pub mod input;
pub mod navigation_panel;
pub mod shell;
pub mod slide_frame;
pub mod theme;
pub mod transition;

/// Re-export commonly used types
pub use input::{read_commands, Command};
pub use navigation_panel::NavigationBar;
pub use shell::{DeckShell, ShellResponse};
pub use slide_frame::SlideFrame;
pub use theme::{apply_theme, Palette, Theme};
pub use transition::{SlideTransition, TransitionFrame, TransitionPhase};

// Common icon definitions
pub mod icons {
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const LIGHT: &str = "☀";
    pub const DARK: &str = "🌙";
}
