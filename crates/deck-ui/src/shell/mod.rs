use egui::{CentralPanel, Context, Frame, Margin, TopBottomPanel};
use deck_core::{NavigationAction, PresentationView, SlideRecord, StyleVariant};

use crate::navigation_panel::{NavigationBar, NavigationBarConfig};
use crate::slide_frame::SlideFrame;
use crate::theme::{theme_toggle, Theme};
use crate::transition::TransitionFrame;

/// What the user did with the shell this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellResponse {
    pub action: Option<NavigationAction>,
    pub toggle_theme: bool,
}

/// Page layout: theme toggle on top, navigation at the bottom, slide in between
pub struct DeckShell<'a> {
    pub view: &'a PresentationView<'a>,
    /// Slide currently on screen; differs from `view.slide` mid-transition
    pub displayed: &'a SlideRecord,
    pub frame: TransitionFrame,
    pub theme: &'a Theme,
    pub variant: StyleVariant,
    pub show_indicators: bool,
}

impl DeckShell<'_> {
    /// Render the whole page
    pub fn show(self, ctx: &Context) -> ShellResponse {
        let mut response = ShellResponse::default();
        let palette = self.theme.palette();

        TopBottomPanel::top("theme_bar")
            .show_separator_line(false)
            .frame(Frame::none().fill(palette.background).inner_margin(Margin::same(12.0)))
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    response.toggle_theme = theme_toggle(ui, self.theme);
                    ui.label(
                        egui::RichText::new(&self.view.counter)
                            .monospace()
                            .color(palette.muted_foreground),
                    );
                });
            });

        TopBottomPanel::bottom("navigation_bar")
            .show_separator_line(false)
            .frame(Frame::none().fill(palette.background).inner_margin(Margin::symmetric(12.0, 24.0)))
            .show(ctx, |ui| {
                let config = NavigationBarConfig {
                    show_indicators: self.show_indicators,
                    ..Default::default()
                };
                response.action = NavigationBar::new(&self.view.indicators, palette)
                    .with_config(config)
                    .ui(ui);
            });

        CentralPanel::default()
            .frame(Frame::none().fill(palette.background).inner_margin(Margin::same(32.0)))
            .show(ctx, |ui| {
                SlideFrame::new(self.displayed, palette)
                    .variant(self.variant)
                    .opacity(self.frame.opacity)
                    .offset_x(self.frame.offset_x)
                    .show(ui);
            });

        response
    }
}
