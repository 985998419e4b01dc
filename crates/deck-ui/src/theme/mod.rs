use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            dark_mode: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            dark_mode: true,
        }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// The opposite mode
    pub fn toggled(&self) -> Self {
        Self::from_dark_mode(!self.dark_mode)
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.dark_mode)
    }
}

/// Named colors used by the deck widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub card_foreground: Color32,
    pub muted: Color32,
    pub muted_foreground: Color32,
    pub primary: Color32,
    pub accent: Color32,
    pub border: Color32,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color32::from_rgb(9, 9, 11),
                card: Color32::from_rgb(24, 24, 27),
                card_foreground: Color32::from_rgb(250, 250, 250),
                muted: Color32::from_rgb(39, 39, 42),
                muted_foreground: Color32::from_rgb(161, 161, 170),
                primary: Color32::from_rgb(250, 250, 250),
                accent: Color32::from_rgb(63, 63, 70),
                border: Color32::from_rgb(39, 39, 42),
            }
        } else {
            Self {
                background: Color32::from_rgb(250, 250, 250),
                card: Color32::from_rgb(255, 255, 255),
                card_foreground: Color32::from_rgb(9, 9, 11),
                muted: Color32::from_rgb(244, 244, 245),
                muted_foreground: Color32::from_rgb(113, 113, 122),
                primary: Color32::from_rgb(24, 24, 27),
                accent: Color32::from_rgb(228, 228, 231),
                border: Color32::from_rgb(228, 228, 231),
            }
        }
    }
}

/// Apply the presentation theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let palette = theme.palette();
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    // Window and panel styling
    visuals.window_fill = palette.card;
    visuals.panel_fill = palette.background;
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.muted;
    visuals.override_text_color = Some(palette.card_foreground);

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = palette.card;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.card_foreground);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_fill = palette.background;
    visuals.widgets.inactive.weak_bg_fill = palette.background;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.card_foreground);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_fill = palette.accent;
    visuals.widgets.hovered.weak_bg_fill = palette.accent;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.border);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.card_foreground);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.active.weak_bg_fill = palette.accent;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, palette.primary);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.card_foreground);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = palette.primary.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, palette.primary);

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(16.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(32.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace));

    style.text_styles = font_sizes;
    style.visuals = visuals;

    ctx.set_style(style);
}

/// Light/dark toggle button; returns true when clicked
pub fn theme_toggle(ui: &mut egui::Ui, theme: &Theme) -> bool {
    let (icon, hover_text) = if theme.dark_mode {
        (crate::icons::LIGHT, "Switch to light mode (T)")
    } else {
        (crate::icons::DARK, "Switch to dark mode (T)")
    };

    ui.add_sized(
        [36.0, 36.0],
        egui::Button::new(egui::RichText::new(icon).size(18.0)),
    )
    .on_hover_text(hover_text)
    .clicked()
}
