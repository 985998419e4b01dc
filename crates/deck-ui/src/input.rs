//! Keyboard shortcuts

use deck_core::NavigationAction;
use egui::{Context, Key};

/// Something the user asked for from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(NavigationAction),
    ToggleTheme,
}

const SHORTCUT_KEYS: &[Key] = &[
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::PageUp,
    Key::PageDown,
    Key::Space,
    Key::Home,
    Key::End,
    Key::T,
];

/// Map a key to its command
pub fn command_for_key(key: Key) -> Option<Command> {
    let command = match key {
        Key::ArrowLeft | Key::PageUp => Command::Navigate(NavigationAction::Retreat),
        Key::ArrowRight | Key::PageDown | Key::Space => Command::Navigate(NavigationAction::Advance),
        Key::Home => Command::Navigate(NavigationAction::First),
        Key::End => Command::Navigate(NavigationAction::Last),
        Key::T => Command::ToggleTheme,
        _ => return None,
    };
    Some(command)
}

/// Keys egui turns into a click on the focused widget
fn activates_focused_widget(key: Key) -> bool {
    matches!(key, Key::Space | Key::Enter)
}

/// Commands for the keys pressed this frame
///
/// While a widget has keyboard focus, Space belongs to that widget.
pub fn read_commands(ctx: &Context) -> Vec<Command> {
    let widget_focused = ctx.memory(|m| m.focus().is_some());
    ctx.input(|i| {
        SHORTCUT_KEYS
            .iter()
            .filter(|key| !(widget_focused && activates_focused_widget(**key)))
            .filter(|key| i.key_pressed(**key))
            .filter_map(|key| command_for_key(*key))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation_panel::NavigationBar;
    use crate::theme::Palette;
    use deck_core::presentation::indicators;

    fn key_press(key: Key) -> egui::Event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// One frame wired like the app: shortcuts first, then the navigation bar
    fn run_frame(ctx: &Context, events: Vec<egui::Event>) -> Vec<NavigationAction> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1024.0, 768.0))),
            events,
            ..Default::default()
        };
        let dots = indicators(6, 0);
        let mut actions = Vec::new();

        let _ = ctx.run(input, |ctx| {
            for command in read_commands(ctx) {
                if let Command::Navigate(action) = command {
                    actions.push(action);
                }
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(action) = NavigationBar::new(&dots, Palette::for_mode(false)).ui(ui) {
                    actions.push(action);
                }
            });
        });

        actions
    }

    #[test]
    fn test_space_advances_when_nothing_is_focused() {
        let ctx = Context::default();
        run_frame(&ctx, Vec::new());

        let actions = run_frame(&ctx, vec![key_press(Key::Space)]);
        assert_eq!(actions, vec![NavigationAction::Advance]);
    }

    #[test]
    fn test_space_on_focused_button_navigates_once() {
        let ctx = Context::default();
        run_frame(&ctx, Vec::new());

        // Tab focuses the previous button
        assert!(run_frame(&ctx, vec![key_press(Key::Tab)]).is_empty());
        assert!(ctx.memory(|m| m.focus().is_some()));

        let actions = run_frame(&ctx, vec![key_press(Key::Space)]);
        assert_eq!(actions, vec![NavigationAction::Retreat]);
    }

    #[test]
    fn test_page_down_still_works_with_focused_button() {
        let ctx = Context::default();
        run_frame(&ctx, Vec::new());
        run_frame(&ctx, vec![key_press(Key::Tab)]);

        let actions = run_frame(&ctx, vec![key_press(Key::PageDown)]);
        assert_eq!(actions, vec![NavigationAction::Advance]);
    }

    #[test]
    fn test_arrow_keys_navigate() {
        assert_eq!(command_for_key(Key::ArrowLeft), Some(Command::Navigate(NavigationAction::Retreat)));
        assert_eq!(command_for_key(Key::ArrowRight), Some(Command::Navigate(NavigationAction::Advance)));
        assert_eq!(command_for_key(Key::Home), Some(Command::Navigate(NavigationAction::First)));
        assert_eq!(command_for_key(Key::End), Some(Command::Navigate(NavigationAction::Last)));
    }

    #[test]
    fn test_theme_key() {
        assert_eq!(command_for_key(Key::T), Some(Command::ToggleTheme));
    }

    #[test]
    fn test_every_shortcut_key_is_mapped() {
        for key in SHORTCUT_KEYS {
            assert!(command_for_key(*key).is_some(), "{key:?}");
        }
        assert_eq!(command_for_key(Key::A), None);
    }
}
