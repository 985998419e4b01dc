//! Slide records and the registry that holds them

use crate::navigation::NavigationPosition;
use crate::DeckError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Heading size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// Large subtitle under the slide title
    Primary,
    /// Small section heading
    Secondary,
}

/// Text emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Normal,
    Muted,
    /// Semibold muted lead-in line
    Lead,
}

/// A boxed item with a bold line and a small caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub caption: String,
}

/// A large value with a small label underneath
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A single piece of slide content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading { text: String, level: HeadingLevel, tone: Tone, centered: bool },
    Paragraph { text: String, tone: Tone, centered: bool },
    Section { heading: String, body: String },
    Bullets(Vec<String>),
    Cards(Vec<Card>),
    Stats(Vec<Stat>),
}

/// The renderable body of a slide
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideContent {
    blocks: Vec<Block>,
}

impl SlideContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn heading(self, text: impl Into<String>, level: HeadingLevel) -> Self {
        self.push(Block::Heading { text: text.into(), level, tone: Tone::Normal, centered: false })
    }

    /// Heading drawn in the muted foreground color
    pub fn muted_heading(self, text: impl Into<String>, level: HeadingLevel) -> Self {
        self.push(Block::Heading { text: text.into(), level, tone: Tone::Muted, centered: false })
    }

    pub fn centered_heading(self, text: impl Into<String>, level: HeadingLevel) -> Self {
        self.push(Block::Heading { text: text.into(), level, tone: Tone::Normal, centered: true })
    }

    pub fn paragraph(self, text: impl Into<String>, tone: Tone) -> Self {
        self.push(Block::Paragraph { text: text.into(), tone, centered: false })
    }

    pub fn centered_paragraph(self, text: impl Into<String>, tone: Tone) -> Self {
        self.push(Block::Paragraph { text: text.into(), tone, centered: true })
    }

    pub fn section(self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.push(Block::Section { heading: heading.into(), body: body.into() })
    }

    pub fn bullets<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::Bullets(items.into_iter().map(Into::into).collect()))
    }

    pub fn cards<I, T, C>(self, cards: I) -> Self
    where
        I: IntoIterator<Item = (T, C)>,
        T: Into<String>,
        C: Into<String>,
    {
        let cards = cards
            .into_iter()
            .map(|(title, caption)| Card { title: title.into(), caption: caption.into() })
            .collect();
        self.push(Block::Cards(cards))
    }

    pub fn stats<I, V, L>(self, stats: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let stats = stats
            .into_iter()
            .map(|(value, label)| Stat { value: value.into(), label: label.into() })
            .collect();
        self.push(Block::Stats(stats))
    }

    fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// One slide: a title plus its content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    title: String,
    content: SlideContent,
}

impl SlideRecord {
    pub fn new(title: impl Into<String>, content: SlideContent) -> Self {
        Self { title: title.into(), content }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &SlideContent {
        &self.content
    }
}

/// Fixed, ordered, read-only collection of slides
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    slides: Vec<SlideRecord>,
}

impl SlideRegistry {
    /// Build a registry, rejecting an empty deck
    pub fn new(slides: Vec<SlideRecord>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::EmptyRegistry);
        }
        Ok(Self { slides })
    }

    pub fn slide_count(&self) -> NonZeroUsize {
        // Non-empty by construction
        NonZeroUsize::new(self.slides.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// The slide at a navigation position
    ///
    /// Positions produced by an engine sized for this registry are always in
    /// range; anything else is folded back into range.
    pub fn at(&self, position: NavigationPosition) -> &SlideRecord {
        &self.slides[position.index() % self.slides.len()]
    }

    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideRecord> {
        self.slides.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.slides.iter().map(SlideRecord::title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_is_rejected() {
        assert!(matches!(SlideRegistry::new(Vec::new()), Err(DeckError::EmptyRegistry)));
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SlideRegistry::new(vec![
            SlideRecord::new("one", SlideContent::new()),
            SlideRecord::new("two", SlideContent::new().bullets(["a", "b"])),
        ])
        .unwrap();

        assert_eq!(registry.slide_count().get(), 2);
        assert_eq!(registry.get(1).map(SlideRecord::title), Some("two"));
        assert!(registry.get(2).is_none());
        assert_eq!(registry.titles().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_content_builder_keeps_block_order() {
        let content = SlideContent::new()
            .centered_heading("Title", HeadingLevel::Primary)
            .paragraph("lead", Tone::Lead)
            .cards([("Week 1", "intro")])
            .stats([("30%", "tests")]);

        let blocks = content.blocks();
        assert_eq!(blocks.len(), 4);
        assert!(matches!(&blocks[0], Block::Heading { centered: true, tone: Tone::Normal, .. }));
        assert!(matches!(&blocks[1], Block::Paragraph { tone: Tone::Lead, .. }));
        assert_eq!(
            blocks[2],
            Block::Cards(vec![Card { title: "Week 1".into(), caption: "intro".into() }])
        );
        assert_eq!(
            blocks[3],
            Block::Stats(vec![Stat { value: "30%".into(), label: "tests".into() }])
        );
    }
}
