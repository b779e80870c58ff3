use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_tui::app::App;
use roster_tui::roster::RosterEvent;

/// Build a minimal `App` for integration testing.
/// Demo roster, navigation enabled, no terminal -- just state.
pub fn test_app() -> App {
    App::test_default()
}

/// Helper: press an unmodified key.
pub fn press(app: &mut App, code: KeyCode) {
    roster_tui::app::dispatch_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

/// Helper: press a key `n` times.
pub fn press_n(app: &mut App, code: KeyCode, n: usize) {
    for _ in 0..n {
        press(app, code);
    }
}

/// Helper: push a roster change through the app's event handling.
pub fn send_roster_event(app: &mut App, event: RosterEvent) {
    roster_tui::app::handle_roster_event(app, event);
}

/// Raw cursor of `list` (`-1` for container focus).
pub fn cursor(app: &App, list: roster_tui::nav::ListId) -> isize {
    app.navigator
        .as_ref()
        .and_then(|nav| nav.registry().cursor(list))
        .map_or(-1, roster_tui::nav::FocusCursor::raw)
}
