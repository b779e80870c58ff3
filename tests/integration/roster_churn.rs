// =====
// TESTS: 2
// =====
//
// Scripted roster churn against a live cursor.

use crossterm::event::KeyCode;
use roster_tui::app::simulate::script_step;
use roster_tui::nav::ListId;

use crate::helpers::{cursor, press, press_n, send_roster_event, test_app};

#[test]
fn cursor_stays_in_bounds_through_churn() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    let keys = [KeyCode::Down, KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Esc];
    for step in 0..60 {
        send_roster_event(&mut app, script_step(step));
        press(&mut app, keys[step % keys.len()]);
        let raw = cursor(&app, ListId::Participants);
        let count = isize::try_from(app.roster.users.len()).unwrap();
        assert!(raw == -1 || (0..count).contains(&raw), "step {step}: {raw} of {count}");
        // Close any menu an activation may have opened so arrows keep reaching the list.
        if app.menu.is_some() {
            press(&mut app, KeyCode::Esc);
        }
    }
}

#[test]
fn guest_joining_is_reachable_by_wrapping_up() {
    let mut app = test_app();
    press(&mut app, KeyCode::Tab);
    send_roster_event(&mut app, script_step(0));
    press(&mut app, KeyCode::Up);
    let last = isize::try_from(app.roster.users.len() - 1).unwrap();
    assert_eq!(cursor(&app, ListId::Participants), last);
    press_n(&mut app, KeyCode::Down, 1);
    assert_eq!(cursor(&app, ListId::Participants), 0);
}
