// roster_tui — Keyboard-navigable meeting roster for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Scripted roster churn for `--simulate`: people join and leave, messages arrive.

use crate::roster::{Chat, Role, RosterEvent, User};
use std::time::Duration;
use tokio::sync::mpsc;

const SCRIPT_LEN: usize = 5;

/// Event number `step` of the endless script. Each cycle uses its own guest.
pub fn script_step(step: usize) -> RosterEvent {
    let round = step / SCRIPT_LEN + 1;
    let guest_id = format!("guest-{round}");
    match step % SCRIPT_LEN {
        0 => RosterEvent::UserJoined(User {
            id: guest_id,
            name: format!("Guest {round}"),
            role: Role::Viewer,
            is_presenter: false,
            is_current: false,
            emoji: None,
            voice: None,
        }),
        1 => RosterEvent::ChatOpened(Chat {
            id: guest_id,
            name: format!("Guest {round}"),
            unread: 1,
        }),
        2 => RosterEvent::MessageReceived { chat_id: "public".to_owned() },
        3 => RosterEvent::UserLeft(guest_id),
        _ => RosterEvent::ChatClosed(guest_id),
    }
}

/// Send the script into `tx` every `period` until the receiver goes away.
pub fn spawn(
    tx: mpsc::UnboundedSender<RosterEvent>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // First tick completes immediately.
        ticker.tick().await;
        for step in 0.. {
            ticker.tick().await;
            if tx.send(script_step(step)).is_err() {
                tracing::debug!(step, "simulation stopped, receiver closed");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    #[test]
    fn one_cycle_returns_roster_to_its_shape() {
        let mut roster = Roster::demo();
        let (users, chats) = (roster.users.len(), roster.open_chats.len());
        for step in 0..SCRIPT_LEN {
            assert!(roster.apply(script_step(step)), "step {step} had no effect");
            if step == 0 {
                assert_eq!(roster.users.len(), users + 1);
            }
        }
        assert_eq!(roster.users.len(), users);
        assert_eq!(roster.open_chats.len(), chats);
    }

    #[test]
    fn guests_differ_between_cycles() {
        assert_ne!(script_step(0), script_step(SCRIPT_LEN));
    }

    #[tokio::test]
    async fn spawned_task_delivers_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn(tx, Duration::from_millis(10));
        for step in 0..3 {
            assert_eq!(rx.recv().await, Some(script_step(step)));
        }
        drop(rx);
        handle.await.unwrap();
    }
}
