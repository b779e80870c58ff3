// =====
// TESTS: 4
// =====
//
// Participant activation: action menu contents, menu navigation,
// and the effects of running a row.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use roster_tui::app::actions::UserActionKind;
use roster_tui::nav::ListId;

use crate::helpers::{cursor, press, press_n, test_app};

/// Focus participant `index` and activate it.
fn open_menu_for(app: &mut roster_tui::app::App, index: usize) {
    press(app, KeyCode::Tab);
    press_n(app, KeyCode::Down, index + 1);
    press(app, KeyCode::Right);
}

#[test]
fn menu_lists_rows_for_target() {
    let mut app = test_app();
    open_menu_for(&mut app, 2);
    let menu = app.menu.as_ref().expect("menu open");
    let kinds: Vec<UserActionKind> = menu.actions.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            UserActionKind::OpenChat,
            UserActionKind::ClearStatus,
            UserActionKind::SetPresenter,
            UserActionKind::Kick,
        ]
    );
}

#[test]
fn menu_wraps_and_runs_selected_row() {
    let mut app = test_app();
    open_menu_for(&mut app, 3);
    // Mei: chat, make presenter, kick, mute
    press(&mut app, KeyCode::Up);
    let selected = app.menu.as_ref().and_then(|m| m.selected()).map(|a| a.kind);
    assert_eq!(selected, Some(UserActionKind::Mute));
    press(&mut app, KeyCode::Enter);
    assert!(app.menu.is_none());
    assert_eq!(app.outbox.last().map(|c| c.method), Some("muteUser"));
    let mei = app.roster.user("u-4").expect("still present");
    assert_eq!(mei.voice.map(|v| v.muted), Some(true));
}

#[test]
fn kicked_row_leaves_stale_cursor_that_recovers() {
    let mut app = test_app();
    open_menu_for(&mut app, 4);
    // Lars is last; kicking shrinks the list under the cursor.
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.roster.users.len(), 4);
    assert_eq!(cursor(&app, ListId::Participants), 4);

    press(&mut app, KeyCode::Down);
    assert_eq!(cursor(&app, ListId::Participants), 0);
}

#[test]
fn chat_row_sets_route() {
    let mut app = test_app();
    open_menu_for(&mut app, 1);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.route.as_deref(), Some("/users/chat/u-2"));
    assert_eq!(app.status_line.as_deref(), Some("/users/chat/u-2"));
}
