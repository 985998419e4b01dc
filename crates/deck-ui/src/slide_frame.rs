//! Generic slide frame: a title over the slide's content blocks

use deck_core::{Block, Card, HeadingLevel, SlideRecord, Stat, StyleVariant, Tone};
use egui::epaint::Shadow;
use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke, Ui, Vec2};

use crate::theme::Palette;

/// Widest the slide gets, in points
pub const MAX_SLIDE_WIDTH: f32 = 896.0;

/// Draws one slide
pub struct SlideFrame<'a> {
    slide: &'a SlideRecord,
    palette: Palette,
    variant: StyleVariant,
    opacity: f32,
    offset_x: f32,
}

impl<'a> SlideFrame<'a> {
    pub fn new(slide: &'a SlideRecord, palette: Palette) -> Self {
        Self {
            slide,
            palette,
            variant: StyleVariant::Card,
            opacity: 1.0,
            offset_x: 0.0,
        }
    }

    pub fn variant(mut self, variant: StyleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn offset_x(mut self, offset_x: f32) -> Self {
        self.offset_x = offset_x;
        self
    }

    /// Draw the slide centered horizontally in `ui`
    pub fn show(self, ui: &mut Ui) {
        let available = ui.available_rect_before_wrap();
        let width = available.width().min(MAX_SLIDE_WIDTH);
        let left = available.center().x - width / 2.0 + self.offset_x;
        let rect = egui::Rect::from_min_size(
            egui::pos2(left, available.top()),
            Vec2::new(width, available.height()),
        );

        let mut child = ui.child_ui(rect, egui::Layout::top_down(egui::Align::Min));
        match self.variant {
            StyleVariant::Card => {
                let frame = Frame::none()
                    .fill(self.fade(self.palette.card).linear_multiply(0.9))
                    .stroke(Stroke::new(1.0, self.fade(self.palette.border)))
                    .rounding(Rounding::same(12.0))
                    .inner_margin(Margin::same(24.0))
                    .shadow(Shadow {
                        extrusion: 16.0,
                        color: Color32::from_black_alpha((40.0 * self.opacity) as u8),
                    });
                frame.show(&mut child, |ui| {
                    ui.set_width(width - 48.0);
                    self.contents(ui);
                });
            }
            StyleVariant::Plain => {
                Frame::none()
                    .inner_margin(Margin::symmetric(8.0, 16.0))
                    .show(&mut child, |ui| {
                        ui.set_width(width - 16.0);
                        self.contents(ui);
                    });
            }
        }
    }

    fn contents(&self, ui: &mut Ui) {
        let title_size = match self.variant {
            StyleVariant::Card => 32.0,
            StyleVariant::Plain => 28.0,
        };

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(self.slide.title())
                    .size(title_size)
                    .strong()
                    .color(self.fade(self.palette.card_foreground)),
            );
        });
        ui.add_space(24.0);

        for block in self.slide.content().blocks() {
            self.block(ui, block);
            ui.add_space(16.0);
        }
    }

    fn block(&self, ui: &mut Ui, block: &Block) {
        match block {
            Block::Heading { text, level, tone, centered } => {
                let size = match level {
                    HeadingLevel::Primary => 22.0,
                    HeadingLevel::Secondary => 18.0,
                };
                let color = match tone {
                    Tone::Normal => self.palette.card_foreground,
                    Tone::Muted | Tone::Lead => self.palette.muted_foreground,
                };
                let text = RichText::new(text).size(size).strong().color(self.fade(color));
                aligned(ui, *centered, |ui| {
                    ui.label(text);
                });
                if *level == HeadingLevel::Primary {
                    ui.add_space(16.0);
                }
            }
            Block::Paragraph { text, tone, centered } => {
                let text = self.toned(text, *tone);
                aligned(ui, *centered, |ui| {
                    ui.label(text);
                });
            }
            Block::Section { heading, body } => {
                ui.label(
                    RichText::new(heading)
                        .size(18.0)
                        .strong()
                        .color(self.fade(self.palette.card_foreground)),
                );
                ui.add_space(4.0);
                ui.label(self.toned(body, Tone::Muted));
            }
            Block::Bullets(items) => self.bullets(ui, items),
            Block::Cards(cards) => self.cards(ui, cards),
            Block::Stats(stats) => self.stats(ui, stats),
        }
    }

    fn bullets(&self, ui: &mut Ui, items: &[String]) {
        for item in items {
            ui.horizontal_wrapped(|ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("•").color(self.fade(self.palette.muted_foreground)));
                ui.label(self.toned(item, Tone::Muted));
            });
        }
    }

    fn cards(&self, ui: &mut Ui, cards: &[Card]) {
        for card in cards {
            self.muted_box(8.0).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(&card.title)
                        .size(16.0)
                        .strong()
                        .color(self.fade(self.palette.card_foreground)),
                );
                ui.label(
                    RichText::new(&card.caption)
                        .size(13.0)
                        .color(self.fade(self.palette.muted_foreground)),
                );
            });
        }
    }

    fn stats(&self, ui: &mut Ui, stats: &[Stat]) {
        if stats.is_empty() {
            return;
        }
        ui.columns(stats.len(), |columns| {
            for (column, stat) in columns.iter_mut().zip(stats) {
                self.muted_box(16.0).show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(&stat.value)
                                .size(20.0)
                                .strong()
                                .color(self.fade(self.palette.card_foreground)),
                        );
                        ui.label(
                            RichText::new(&stat.label)
                                .size(13.0)
                                .color(self.fade(self.palette.muted_foreground)),
                        );
                    });
                });
            }
        });
    }

    fn muted_box(&self, padding: f32) -> Frame {
        Frame::none()
            .fill(self.fade(self.palette.muted))
            .rounding(Rounding::same(6.0))
            .inner_margin(Margin::same(padding))
    }

    fn toned(&self, text: &str, tone: Tone) -> RichText {
        let text = RichText::new(text).size(16.0);
        match tone {
            Tone::Normal => text.color(self.fade(self.palette.card_foreground)),
            Tone::Muted => text.color(self.fade(self.palette.muted_foreground)),
            Tone::Lead => text.strong().color(self.fade(self.palette.muted_foreground)),
        }
    }

    /// Apply the transition opacity to a color
    fn fade(&self, color: Color32) -> Color32 {
        color.linear_multiply(self.opacity)
    }
}

fn aligned(ui: &mut Ui, centered: bool, add_contents: impl FnOnce(&mut Ui)) {
    if centered {
        ui.vertical_centered(add_contents);
    } else {
        add_contents(ui);
    }
}
