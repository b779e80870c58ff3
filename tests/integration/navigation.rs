// =====
// TESTS: 7
// =====
//
// Roving navigation through the app: key routing, per-pane cursors,
// activation, and recovery after the lists change size.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use roster_tui::nav::{FocusSlot, ListId};

use crate::helpers::{cursor, press, press_n, send_roster_event, test_app};

#[test]
fn down_down_up_walks_messages() {
    let mut app = test_app();
    send_roster_event(
        &mut app,
        roster_tui::roster::RosterEvent::ChatOpened(roster_tui::roster::Chat {
            id: "u-3".to_owned(),
            name: "Kofi Mensah".to_owned(),
            unread: 0,
        }),
    );
    send_roster_event(
        &mut app,
        roster_tui::roster::RosterEvent::ChatOpened(roster_tui::roster::Chat {
            id: "u-4".to_owned(),
            name: "Mei Tanaka".to_owned(),
            unread: 0,
        }),
    );
    assert_eq!(app.roster.open_chats.len(), 4);

    let mut seen = Vec::new();
    for code in [KeyCode::Down, KeyCode::Down, KeyCode::Up] {
        press(&mut app, code);
        seen.push(cursor(&app, ListId::Messages));
    }
    assert_eq!(seen, vec![0, 1, 0]);
    assert_eq!(app.panes.messages.slot, FocusSlot::Item(0));
}

#[test]
fn escape_returns_to_container_twice_without_change() {
    let mut app = test_app();
    press_n(&mut app, KeyCode::Down, 2);
    press(&mut app, KeyCode::Esc);
    assert_eq!(cursor(&app, ListId::Messages), -1);
    assert_eq!(app.panes.messages.slot, FocusSlot::Container);
    press(&mut app, KeyCode::Esc);
    assert_eq!(cursor(&app, ListId::Messages), -1);
    assert_eq!(app.panes.messages.slot, FocusSlot::Container);
}

#[test]
fn panes_keep_independent_cursors() {
    let mut app = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Tab);
    press_n(&mut app, KeyCode::Down, 3);
    assert_eq!(cursor(&app, ListId::Participants), 2);
    assert_eq!(cursor(&app, ListId::Messages), 0);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    assert_eq!(cursor(&app, ListId::Messages), 1);
    assert_eq!(cursor(&app, ListId::Participants), 2);
}

#[test]
fn enter_on_chat_opens_route() {
    let mut app = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route.as_deref(), Some("/users/chat/public"));
    assert_eq!(app.roster.open_chats[0].unread, 0);
    assert_eq!(cursor(&app, ListId::Messages), 0);
}

#[test]
fn enter_on_container_does_nothing() {
    let mut app = test_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    assert!(app.route.is_none());
    assert!(app.menu.is_none());
}

#[test]
fn shrinking_list_resets_stale_cursor() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    press_n(&mut app, KeyCode::Down, 5);
    assert_eq!(cursor(&app, ListId::Participants), 4);

    for id in ["u-5", "u-4", "u-3"] {
        send_roster_event(&mut app, roster_tui::roster::RosterEvent::UserLeft(id.to_owned()));
    }
    assert_eq!(app.roster.users.len(), 2);

    press(&mut app, KeyCode::Enter);
    assert_eq!(cursor(&app, ListId::Participants), -1);
    assert_eq!(app.panes.participants.slot, FocusSlot::Container);
    assert!(app.menu.is_none());
}

#[test]
fn compact_mode_ignores_navigation() {
    let mut app = roster_tui::app::App::new(roster_tui::roster::Roster::demo(), true);
    press_n(&mut app, KeyCode::Down, 3);
    press(&mut app, KeyCode::Enter);
    assert!(app.navigator.is_none());
    assert_eq!(app.panes.messages.slot, FocusSlot::Container);
    assert!(app.route.is_none());
}
