//! Navigation engine implementation

use super::{NavigationAction, NavigationBounds, NavigationChange, NavigationContext, NavigationPosition};
use crate::registry::SlideRegistry;
use std::num::NonZeroUsize;

/// The main navigation engine
///
/// Owns the current slide index. `advance`, `retreat` and `jump_to` are the
/// only mutators and each one keeps the index inside the deck bounds, so the
/// current position is always a valid registry index.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    bounds: NavigationBounds,
    position: NavigationPosition,
}

impl NavigationEngine {
    /// Create a new engine positioned on the first slide
    pub fn new(slide_count: NonZeroUsize) -> Self {
        Self {
            bounds: NavigationBounds::new(slide_count),
            position: NavigationPosition::FIRST,
        }
    }

    /// Create an engine sized for a registry
    pub fn for_registry(registry: &SlideRegistry) -> Self {
        Self::new(registry.slide_count())
    }

    /// Navigate forward by one slide
    pub fn advance(&mut self) -> NavigationChange {
        let to = self.bounds.next(self.position);
        self.move_to(to)
    }

    /// Navigate backward by one slide
    pub fn retreat(&mut self) -> NavigationChange {
        let to = self.bounds.previous(self.position);
        self.move_to(to)
    }

    /// Jump to a specific slide
    ///
    /// Indices past the end are folded back into range rather than trusted.
    pub fn jump_to(&mut self, index: usize) -> NavigationChange {
        let to = self.bounds.wrap(index);
        self.move_to(to)
    }

    /// Apply a UI action
    pub fn apply(&mut self, action: NavigationAction) -> NavigationChange {
        match action {
            NavigationAction::Advance => self.advance(),
            NavigationAction::Retreat => self.retreat(),
            NavigationAction::JumpTo(index) => self.jump_to(index),
            NavigationAction::First => self.jump_to(0),
            NavigationAction::Last => {
                let last = self.bounds.last();
                self.move_to(last)
            }
        }
    }

    pub fn current(&self) -> NavigationPosition {
        self.position
    }

    pub fn slide_count(&self) -> usize {
        self.bounds.slide_count()
    }

    /// Get current navigation context
    pub fn get_context(&self) -> NavigationContext {
        NavigationContext {
            position: self.position,
            slide_count: self.bounds.slide_count(),
        }
    }

    fn move_to(&mut self, to: NavigationPosition) -> NavigationChange {
        debug_assert!(self.bounds.contains(to));
        let from = std::mem::replace(&mut self.position, to);
        NavigationChange { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(n: usize) -> NavigationEngine {
        NavigationEngine::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_starts_on_first_slide() {
        let nav = engine(6);
        assert_eq!(nav.current(), NavigationPosition::FIRST);
        assert!(nav.get_context().is_first());
    }

    #[test]
    fn test_advance_full_cycle_returns_to_start() {
        for n in 1..=8 {
            for start in 0..n {
                let mut nav = engine(n);
                nav.jump_to(start);
                for _ in 0..n {
                    nav.advance();
                }
                assert_eq!(nav.current().index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn test_retreat_is_inverse_of_advance() {
        for n in 1..=8 {
            for start in 0..n {
                let mut nav = engine(n);
                nav.jump_to(start);
                nav.advance();
                nav.retreat();
                assert_eq!(nav.current().index(), start, "advance then retreat, n={n}");

                nav.retreat();
                nav.advance();
                assert_eq!(nav.current().index(), start, "retreat then advance, n={n}");
            }
        }
    }

    #[test]
    fn test_wraparound_boundaries() {
        let mut nav = engine(6);
        nav.jump_to(5);
        let change = nav.advance();
        assert_eq!(change.from.index(), 5);
        assert_eq!(change.to.index(), 0);

        let change = nav.retreat();
        assert_eq!(change.to.index(), 5);
        assert!(nav.get_context().is_last());
    }

    #[test]
    fn test_jump_to_valid_index() {
        let mut nav = engine(6);
        for j in 0..6 {
            nav.jump_to(j);
            assert_eq!(nav.current().index(), j);
        }
    }

    #[test]
    fn test_jump_to_out_of_range_wraps() {
        let mut nav = engine(6);
        nav.jump_to(9);
        assert_eq!(nav.current().index(), 3);
        nav.jump_to(usize::MAX);
        assert!(nav.current().index() < 6);
    }

    #[test]
    fn test_apply_actions() {
        let mut nav = engine(4);
        assert_eq!(nav.apply(NavigationAction::Last).to.index(), 3);
        assert_eq!(nav.apply(NavigationAction::Advance).to.index(), 0);
        assert_eq!(nav.apply(NavigationAction::Retreat).to.index(), 3);
        assert_eq!(nav.apply(NavigationAction::First).to.index(), 0);
        assert_eq!(nav.apply(NavigationAction::JumpTo(2)).to.index(), 2);
    }

    #[test]
    fn test_change_reports_whether_it_moved() {
        let mut nav = engine(3);
        assert!(!nav.jump_to(0).moved());
        assert!(nav.advance().moved());

        let mut single = engine(1);
        assert!(!single.advance().moved());
    }

    #[test]
    fn test_last_write_wins() {
        let mut nav = engine(6);
        nav.advance();
        nav.jump_to(4);
        nav.retreat();
        assert_eq!(nav.current().index(), 3);
    }
}
