//! Core functionality for the slide deck presenter
//!
//! This crate provides the slide registry, the navigation state machine and
//! the pure presentation projection. Nothing in here depends on egui, so the
//! whole navigation contract can be tested headless.

pub mod curriculum;
pub mod navigation;
pub mod presentation;
pub mod registry;
pub mod state;

use thiserror::Error;

// Re-export commonly used types
pub use navigation::{
    NavigationAction, NavigationBounds, NavigationChange, NavigationContext,
    NavigationEngine, NavigationPosition,
};
pub use presentation::{render, Indicator, PresentationView};
pub use registry::{Block, Card, HeadingLevel, SlideContent, SlideRecord, SlideRegistry, Stat, Tone};
pub use state::{DeckSettings, StyleVariant, TransitionKind, TransitionSettings};

/// Errors that can occur while setting up a presentation
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("a presentation needs at least one slide")]
    EmptyRegistry,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for DeckError {
    fn from(error: serde_json::Error) -> Self {
        DeckError::Settings(error.to_string())
    }
}
