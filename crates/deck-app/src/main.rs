//! Main application entry point

use eframe::egui::{self, Context};
use anyhow::Result;
use tracing::{debug, error, info, warn, Level};

use deck_core::{
    curriculum::curriculum_slides,
    render, DeckSettings, NavigationAction, NavigationEngine, SlideRegistry,
};
use deck_ui::{read_commands, Command, DeckShell, SlideTransition, Theme};

/// Main application state
struct SlideDeckApp {
    /// The slides, fixed for the lifetime of the app
    registry: SlideRegistry,

    /// Owner of the current slide index
    navigation: NavigationEngine,

    /// Slide change animation
    transition: SlideTransition,

    /// Current theme
    theme: Theme,

    settings: DeckSettings,
}

impl SlideDeckApp {
    fn new(cc: &eframe::CreationContext<'_>, registry: SlideRegistry, settings: DeckSettings) -> Self {
        let app = Self::with_parts(registry, settings);

        deck_ui::apply_theme(&cc.egui_ctx, &app.theme);
        if let Err(e) = deck_ui::fonts::install_fonts(&cc.egui_ctx, app.settings.font_path.as_deref()) {
            warn!("Failed to load font, falling back to bundled fonts: {}", e);
        }

        app
    }

    fn with_parts(registry: SlideRegistry, settings: DeckSettings) -> Self {
        let navigation = NavigationEngine::for_registry(&registry);
        let transition = SlideTransition::new(settings.transition, navigation.current().index());
        let theme = Theme::from_dark_mode(settings.dark_mode);

        Self {
            registry,
            navigation,
            transition,
            theme,
            settings,
        }
    }

    /// Apply a navigation action and start the slide transition
    fn navigate(&mut self, action: NavigationAction, now: f64) {
        let change = self.navigation.apply(action);
        if !change.moved() {
            return;
        }

        self.transition.start(change.to.index(), now);
        debug!(
            "Slide {} -> {}: {}",
            change.from.index(),
            change.to.index(),
            self.registry.at(change.to).title()
        );
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!("Switched to {} theme", self.theme.name);
    }
}

impl eframe::App for SlideDeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let mut theme_changed = false;

        // Handle keyboard shortcuts
        for command in read_commands(ctx) {
            match command {
                Command::Navigate(action) => self.navigate(action, now),
                Command::ToggleTheme => {
                    self.toggle_theme();
                    theme_changed = true;
                }
            }
        }

        self.transition.settle(now);

        let view = render(&self.registry, self.navigation.current());
        let frame = self.transition.frame(now);
        let displayed = self.registry.get(frame.slide).unwrap_or(view.slide);

        let response = DeckShell {
            view: &view,
            displayed,
            frame,
            theme: &self.theme,
            variant: self.settings.variant,
            show_indicators: self.settings.show_indicators,
        }
        .show(ctx);

        if let Some(action) = response.action {
            self.navigate(action, now);
            ctx.request_repaint();
        }
        if response.toggle_theme {
            self.toggle_theme();
            theme_changed = true;
        }
        if theme_changed {
            deck_ui::apply_theme(ctx, &self.theme);
            ctx.request_repaint();
        }

        if self.transition.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

/// Settings from `$SLIDEDECK_CONFIG` or `./slidedeck.json`, else defaults
fn load_settings() -> DeckSettings {
    let Some(path) = DeckSettings::locate() else {
        return DeckSettings::default();
    };

    match DeckSettings::load(&path) {
        Ok(settings) => {
            info!("Using settings from {:?}", path);
            settings
        }
        Err(e) => {
            error!("Ignoring settings file {:?}: {}", path, e);
            DeckSettings::default()
        }
    }
}

fn main() -> Result<()> {
    // Release builds only keep warnings and errors
    let max_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(max_level).init();

    info!("Starting slide deck");

    let settings = load_settings();
    let registry = SlideRegistry::new(curriculum_slides())?;
    info!("Loaded {} slides", registry.slide_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size(settings.window_size)
            .with_min_inner_size([640.0, 480.0]),
        default_theme: if settings.dark_mode { eframe::Theme::Dark } else { eframe::Theme::Light },
        follow_system_theme: false,
        persist_window: false,
        ..Default::default()
    };

    let title = settings.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Box::new(SlideDeckApp::new(cc, registry, settings))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
