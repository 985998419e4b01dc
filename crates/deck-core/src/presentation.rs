//! Pure projection from navigation state to what should be on screen

use crate::navigation::{NavigationAction, NavigationPosition};
use crate::registry::{SlideContent, SlideRecord, SlideRegistry};

/// One progress dot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

impl Indicator {
    /// The action this indicator triggers when clicked
    pub fn action(&self) -> NavigationAction {
        NavigationAction::JumpTo(self.index)
    }
}

/// Everything the UI needs to draw one frame of the deck
#[derive(Debug, Clone)]
pub struct PresentationView<'a> {
    pub position: NavigationPosition,
    pub slide: &'a SlideRecord,
    pub indicators: Vec<Indicator>,
    pub counter: String,
}

impl<'a> PresentationView<'a> {
    pub fn title(&self) -> &'a str {
        self.slide.title()
    }

    pub fn content(&self) -> &'a SlideContent {
        self.slide.content()
    }

    pub fn active_indicator(&self) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.active)
    }
}

/// Select the active slide and build the indicator row
pub fn render(registry: &SlideRegistry, position: NavigationPosition) -> PresentationView<'_> {
    let slide_count = registry.slide_count().get();
    let current = position.index() % slide_count;

    PresentationView {
        position,
        slide: registry.at(position),
        indicators: indicators(slide_count, current),
        counter: format!("{} / {}", current + 1, slide_count),
    }
}

/// Build `slide_count` indicators with exactly the current one active
pub fn indicators(slide_count: usize, current: usize) -> Vec<Indicator> {
    (0..slide_count)
        .map(|index| Indicator { index, active: index == current })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::curriculum_slides;
    use crate::navigation::NavigationEngine;

    fn deck() -> SlideRegistry {
        SlideRegistry::new(curriculum_slides()).unwrap()
    }

    #[test]
    fn test_exactly_one_active_indicator() {
        let registry = deck();
        let mut nav = NavigationEngine::for_registry(&registry);

        for _ in 0..(registry.slide_count().get() * 2) {
            let view = render(&registry, nav.current());
            assert_eq!(view.indicators.len(), registry.slide_count().get());
            assert_eq!(view.indicators.iter().filter(|i| i.active).count(), 1);
            assert_eq!(view.active_indicator().map(|i| i.index), Some(nav.current().index()));
            nav.advance();
        }
    }

    #[test]
    fn test_indicator_action_jumps_to_its_slide() {
        let registry = deck();
        let mut nav = NavigationEngine::for_registry(&registry);
        let view = render(&registry, nav.current());

        let target = view.indicators[4];
        nav.apply(target.action());
        assert_eq!(render(&registry, nav.current()).title(), "4. カリキュラム後期");
    }

    #[test]
    fn test_counter_label() {
        let registry = deck();
        let mut nav = NavigationEngine::for_registry(&registry);
        assert_eq!(render(&registry, nav.current()).counter, "1 / 6");
        nav.retreat();
        assert_eq!(render(&registry, nav.current()).counter, "6 / 6");
    }

    #[test]
    fn test_end_to_end_curriculum_navigation() {
        let registry = deck();
        let mut nav = NavigationEngine::for_registry(&registry);

        assert_eq!(render(&registry, nav.current()).title(), "生成AI活用入門");

        nav.advance();
        assert_eq!(render(&registry, nav.current()).title(), "1. カリキュラム概要");

        nav.jump_to(0);
        nav.retreat();
        assert_eq!(render(&registry, nav.current()).title(), "5. 評価方法");

        nav.jump_to(3);
        assert_eq!(render(&registry, nav.current()).title(), "3. カリキュラム前期");
    }

    #[test]
    fn test_render_reflects_latest_index_immediately() {
        let registry = deck();
        let mut nav = NavigationEngine::for_registry(&registry);
        nav.advance();
        nav.advance();
        nav.jump_to(1);
        let view = render(&registry, nav.current());
        assert_eq!(view.title(), "1. カリキュラム概要");
        assert_eq!(view.position.index(), 1);
    }
}
