use serde::{Serialize, Deserialize};

mod engine;
mod position;

pub use engine::NavigationEngine;
pub use position::{NavigationPosition, NavigationBounds};

/// A request to move through the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    /// Next slide, wrapping to the first
    Advance,
    /// Previous slide, wrapping to the last
    Retreat,
    /// Direct jump (index indicators)
    JumpTo(usize),
    /// First slide
    First,
    /// Last slide
    Last,
}

/// Outcome of a navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationChange {
    pub from: NavigationPosition,
    pub to: NavigationPosition,
}

impl NavigationChange {
    /// Whether the displayed slide actually changed
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Snapshot of the navigation state handed to views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub position: NavigationPosition,
    pub slide_count: usize,
}

impl NavigationContext {
    pub fn is_first(&self) -> bool {
        self.position.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.position.index() + 1 == self.slide_count
    }
}
