use serde::{Serialize, Deserialize};
use std::num::NonZeroUsize;

/// A position in the slide sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationPosition(usize);

impl NavigationPosition {
    /// The first slide
    pub const FIRST: Self = Self(0);

    /// Zero-based slide index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Navigation bounds for a deck of slides
///
/// All position arithmetic goes through here so that every position it
/// hands out is a valid index into a deck of `slide_count` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationBounds {
    slide_count: NonZeroUsize,
}

impl NavigationBounds {
    pub fn new(slide_count: NonZeroUsize) -> Self {
        Self { slide_count }
    }

    pub fn slide_count(self) -> usize {
        self.slide_count.get()
    }

    /// The last slide
    pub fn last(self) -> NavigationPosition {
        NavigationPosition(self.slide_count() - 1)
    }

    pub fn contains(self, position: NavigationPosition) -> bool {
        position.0 < self.slide_count()
    }

    /// Fold an arbitrary index into range
    pub fn wrap(self, index: usize) -> NavigationPosition {
        NavigationPosition(index % self.slide_count())
    }

    /// Step forward, wrapping from the last slide to the first
    pub fn next(self, position: NavigationPosition) -> NavigationPosition {
        self.wrap(position.0 % self.slide_count() + 1)
    }

    /// Step backward, wrapping from the first slide to the last
    pub fn previous(self, position: NavigationPosition) -> NavigationPosition {
        // Adding the count first keeps the unsigned operand from underflowing at 0
        self.wrap(position.0 % self.slide_count() + self.slide_count() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(n: usize) -> NavigationBounds {
        NavigationBounds::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_wrap_folds_out_of_range_indices() {
        let b = bounds(6);
        assert_eq!(b.wrap(3).index(), 3);
        assert_eq!(b.wrap(6).index(), 0);
        assert_eq!(b.wrap(13).index(), 1);
        assert_eq!(b.wrap(usize::MAX).index(), usize::MAX % 6);
    }

    #[test]
    fn test_boundary_steps() {
        let b = bounds(6);
        assert_eq!(b.next(b.last()), NavigationPosition::FIRST);
        assert_eq!(b.previous(NavigationPosition::FIRST), b.last());
    }

    #[test]
    fn test_single_slide_stays_put() {
        let b = bounds(1);
        assert_eq!(b.next(NavigationPosition::FIRST), NavigationPosition::FIRST);
        assert_eq!(b.previous(NavigationPosition::FIRST), NavigationPosition::FIRST);
        assert_eq!(b.last(), NavigationPosition::FIRST);
    }

    #[test]
    fn test_contains() {
        let b = bounds(3);
        assert!(b.contains(b.wrap(2)));
        assert!(!b.contains(NavigationPosition(3)));
    }
}
