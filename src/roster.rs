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

//! Meeting roster: the data behind the two panes.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub name: String,
    #[serde(default)]
    pub is_breakout_room: bool,
}

/// An open conversation in the messages pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unread: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Moderator,
    #[default]
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_presenter: bool,
    #[serde(default)]
    pub is_current: bool,
    /// Raised hand, thumbs up, ... `None` when cleared.
    #[serde(default)]
    pub emoji: Option<String>,
    /// `None` when the user has not joined audio.
    #[serde(default)]
    pub voice: Option<Voice>,
}

impl User {
    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }
}

/// Changes that arrive from outside while the UI is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    UserJoined(User),
    UserLeft(String),
    ChatOpened(Chat),
    ChatClosed(String),
    MessageReceived { chat_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub meeting: Meeting,
    #[serde(default)]
    pub open_chats: Vec<Chat>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Roster {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to read roster file");
            AppError::RosterNotFound
        })?;
        let roster = Self::from_json_str(&raw).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to parse roster file");
            AppError::RosterInvalid
        })?;
        tracing::info!(
            path = %path.display(),
            chats = roster.open_chats.len(),
            users = roster.users.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.users.iter().find(|u| u.is_current)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn chat_mut(&mut self, id: &str) -> Option<&mut Chat> {
        self.open_chats.iter_mut().find(|c| c.id == id)
    }

    /// Apply an external change. Returns `false` when the event did not match anything.
    pub fn apply(&mut self, event: RosterEvent) -> bool {
        match event {
            RosterEvent::UserJoined(user) => {
                if self.user(&user.id).is_some() {
                    return false;
                }
                self.users.push(user);
                true
            }
            RosterEvent::UserLeft(id) => {
                let before = self.users.len();
                self.users.retain(|u| u.id != id);
                self.users.len() != before
            }
            RosterEvent::ChatOpened(chat) => {
                if self.open_chats.iter().any(|c| c.id == chat.id) {
                    return false;
                }
                self.open_chats.push(chat);
                true
            }
            RosterEvent::ChatClosed(id) => {
                let before = self.open_chats.len();
                self.open_chats.retain(|c| c.id != id);
                self.open_chats.len() != before
            }
            RosterEvent::MessageReceived { chat_id } => match self.chat_mut(&chat_id) {
                Some(chat) => {
                    chat.unread = chat.unread.saturating_add(1);
                    true
                }
                None => false,
            },
        }
    }

    /// Built-in sample used when no `--roster` file is given.
    pub fn demo() -> Self {
        fn user(id: &str, name: &str) -> User {
            User {
                id: id.to_owned(),
                name: name.to_owned(),
                role: Role::Viewer,
                is_presenter: false,
                is_current: false,
                emoji: None,
                voice: None,
            }
        }

        let mut me = user("u-1", "You");
        me.role = Role::Moderator;
        me.is_current = true;
        me.voice = Some(Voice { muted: false });

        let mut ana = user("u-2", "Ana Lima");
        ana.is_presenter = true;
        ana.role = Role::Moderator;
        ana.voice = Some(Voice { muted: false });

        let mut kofi = user("u-3", "Kofi Mensah");
        kofi.emoji = Some("raise-hand".to_owned());
        kofi.voice = Some(Voice { muted: true });

        let mut mei = user("u-4", "Mei Tanaka");
        mei.voice = Some(Voice { muted: false });

        let lars = user("u-5", "Lars Eriksen");

        Self {
            meeting: Meeting { name: "Weekly sync".to_owned(), is_breakout_room: false },
            open_chats: vec![
                Chat { id: "public".to_owned(), name: "Public Chat".to_owned(), unread: 2 },
                Chat { id: "u-2".to_owned(), name: "Ana Lima".to_owned(), unread: 0 },
            ],
            users: vec![me, ana, kofi, mei, lars],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    #[test]
    fn parses_minimal_roster_with_defaults() {
        let roster = Roster::from_json_str(
            r#"{
                "meeting": { "name": "Standup" },
                "users": [ { "id": "a", "name": "Alice", "is_current": true } ]
            }"#,
        )
        .unwrap();
        assert_eq!(roster.meeting.name, "Standup");
        assert!(!roster.meeting.is_breakout_room);
        assert!(roster.open_chats.is_empty());
        let alice = roster.current_user().unwrap();
        assert_eq!(alice.role, Role::Viewer);
        assert_eq!(alice.voice, None);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Roster::demo()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster, Roster::demo());
    }

    #[test]
    fn load_maps_errors_to_app_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(Roster::load(&missing), Err(AppError::RosterNotFound));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert_eq!(Roster::load(&bad), Err(AppError::RosterInvalid));
    }

    #[test]
    fn apply_changes_list_lengths() {
        let mut roster = Roster::demo();
        let users = roster.users.len();
        let mut guest = roster.users[4].clone();
        guest.id = "guest".to_owned();

        assert!(roster.apply(RosterEvent::UserJoined(guest.clone())));
        assert!(!roster.apply(RosterEvent::UserJoined(guest)));
        assert_eq!(roster.users.len(), users + 1);

        assert!(roster.apply(RosterEvent::UserLeft("guest".to_owned())));
        assert!(!roster.apply(RosterEvent::UserLeft("guest".to_owned())));
        assert_eq!(roster.users.len(), users);

        assert!(roster.apply(RosterEvent::ChatClosed("u-2".to_owned())));
        assert_eq!(roster.open_chats.len(), 1);
    }

    #[test]
    fn message_bumps_unread_counter() {
        let mut roster = Roster::demo();
        assert!(roster.apply(RosterEvent::MessageReceived { chat_id: "public".to_owned() }));
        assert_eq!(roster.open_chats[0].unread, 3);
        assert!(!roster.apply(RosterEvent::MessageReceived { chat_id: "nope".to_owned() }));
    }
}
