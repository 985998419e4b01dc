//! Navigation bar: previous/next buttons and the progress dots

use deck_core::{Indicator, NavigationAction};
use egui::{Color32, Id, Rounding, Sense, Ui, Vec2};

use crate::theme::Palette;

/// Navigation bar configuration
#[derive(Debug, Clone)]
pub struct NavigationBarConfig {
    /// Size of the previous/next buttons
    pub button_size: Vec2,

    /// Diameter of an inactive dot
    pub dot_size: f32,

    /// Width of the active dot
    pub active_dot_width: f32,

    /// Seconds the dot width animation takes
    pub dot_animation_time: f32,

    pub show_indicators: bool,
}

impl Default for NavigationBarConfig {
    fn default() -> Self {
        Self {
            button_size: Vec2::new(120.0, 40.0),
            dot_size: 8.0,
            active_dot_width: 16.0,
            dot_animation_time: 0.15,
            show_indicators: true,
        }
    }
}

/// Navigation bar widget
pub struct NavigationBar<'a> {
    indicators: &'a [Indicator],
    palette: Palette,
    config: NavigationBarConfig,
}

impl<'a> NavigationBar<'a> {
    pub fn new(indicators: &'a [Indicator], palette: Palette) -> Self {
        Self {
            indicators,
            palette,
            config: NavigationBarConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the bar; returns the action the user picked, if any
    pub fn ui(self, ui: &mut Ui) -> Option<NavigationAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            if let Some(picked) = self.show_buttons(ui) {
                action = Some(picked);
            }

            if self.config.show_indicators {
                ui.add_space(8.0);
                if let Some(picked) = self.show_indicators(ui) {
                    action = Some(picked);
                }
            }
        });

        action
    }

    fn show_buttons(&self, ui: &mut Ui) -> Option<NavigationAction> {
        let mut action = None;
        let spacing = 16.0;
        let row_width = self.config.button_size.x * 2.0 + spacing;

        centered_row(ui, row_width, self.config.button_size.y, |ui| {
            ui.spacing_mut().item_spacing.x = spacing;

            let previous = ui.add_sized(
                self.config.button_size,
                egui::Button::new(format!("{}  前へ", crate::icons::PREVIOUS)),
            );
            if previous.on_hover_text("Previous slide (Left Arrow)").clicked() {
                action = Some(NavigationAction::Retreat);
            }

            let next = ui.add_sized(
                self.config.button_size,
                egui::Button::new(format!("次へ  {}", crate::icons::NEXT)),
            );
            if next.on_hover_text("Next slide (Right Arrow)").clicked() {
                action = Some(NavigationAction::Advance);
            }
        });

        action
    }

    fn show_indicators(&self, ui: &mut Ui) -> Option<NavigationAction> {
        let mut action = None;
        let gap = 8.0;
        let count = self.indicators.len() as f32;
        let row_width = self.config.dot_size * (count - 1.0).max(0.0)
            + self.config.active_dot_width
            + gap * (count - 1.0).max(0.0);

        centered_row(ui, row_width, self.config.dot_size, |ui| {
            ui.spacing_mut().item_spacing.x = gap;

            for indicator in self.indicators {
                let target = if indicator.active {
                    self.config.active_dot_width
                } else {
                    self.config.dot_size
                };
                let width = ui.ctx().animate_value_with_time(
                    Id::new(("slide_indicator", indicator.index)),
                    target,
                    self.config.dot_animation_time,
                );

                let (rect, response) = ui.allocate_exact_size(
                    Vec2::new(width, self.config.dot_size),
                    Sense::click(),
                );

                let color = if indicator.active {
                    self.palette.primary
                } else if response.hovered() {
                    self.palette.muted_foreground
                } else {
                    self.dot_color()
                };
                ui.painter().rect_filled(rect, Rounding::same(self.config.dot_size / 2.0), color);

                if response
                    .on_hover_text(format!("Slide {}", indicator.index + 1))
                    .clicked()
                {
                    action = Some(indicator.action());
                }
            }
        });

        action
    }

    fn dot_color(&self) -> Color32 {
        // The muted fill is nearly invisible on the page background
        self.palette.muted_foreground.linear_multiply(0.35)
    }
}

/// Lay out a fixed-width row centered in the available width
fn centered_row(ui: &mut Ui, width: f32, height: f32, add_contents: impl FnOnce(&mut Ui)) {
    let available = ui.available_width();
    ui.horizontal(|ui| {
        ui.add_space(((available - width) / 2.0).max(0.0));
        ui.allocate_ui(Vec2::new(width, height), |ui| {
            ui.horizontal(add_contents);
        });
    });
}
