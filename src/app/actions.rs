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

//! Per-participant action table.
//!
//! The table is plain data: a label, an icon and a handler that turns the
//! target user into an effect. Which rows show up depends on who is looking
//! at whom; the navigation engine never sees any of it.

use super::App;
use crate::roster::{Roster, RosterEvent, User, Voice};

/// Request the server would receive. Recorded, not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCall {
    pub method: &'static str,
    pub user_id: String,
    pub args: Vec<String>,
}

impl ServerCall {
    fn new(method: &'static str, user: &User) -> Self {
        Self { method, user_id: user.id.clone(), args: Vec::new() }
    }

    fn with_arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_owned());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    Route(String),
    Call(ServerCall),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserActionKind {
    OpenChat,
    ClearStatus,
    SetPresenter,
    Kick,
    Mute,
    Unmute,
}

#[derive(Debug, Clone, Copy)]
pub struct UserAction {
    pub kind: UserActionKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub handler: fn(&User) -> ActionEffect,
}

pub const USER_ACTIONS: [UserAction; 6] = [
    UserAction {
        kind: UserActionKind::OpenChat,
        label: "Chat",
        icon: "\u{1F4AC}",
        handler: |user| ActionEffect::Route(chat_route(&user.id)),
    },
    UserAction {
        kind: UserActionKind::ClearStatus,
        label: "Clear status",
        icon: "\u{2298}",
        handler: |user| {
            ActionEffect::Call(ServerCall::new("setEmojiStatus", user).with_arg("none"))
        },
    },
    UserAction {
        kind: UserActionKind::SetPresenter,
        label: "Make presenter",
        icon: "\u{25A3}",
        handler: |user| ActionEffect::Call(ServerCall::new("assignPresenter", user)),
    },
    UserAction {
        kind: UserActionKind::Kick,
        label: "Kick user",
        icon: "\u{2715}",
        handler: |user| ActionEffect::Call(ServerCall::new("kickUser", user)),
    },
    UserAction {
        kind: UserActionKind::Mute,
        label: "Mute audio",
        icon: "\u{1F507}",
        handler: |user| ActionEffect::Call(ServerCall::new("muteUser", user)),
    },
    UserAction {
        kind: UserActionKind::Unmute,
        label: "Unmute audio",
        icon: "\u{1F50A}",
        handler: |user| ActionEffect::Call(ServerCall::new("unmuteUser", user)),
    },
];

pub fn chat_route(id: &str) -> String {
    format!("/users/chat/{id}")
}

fn is_allowed(kind: UserActionKind, roster: &Roster, viewer: Option<&User>, target: &User) -> bool {
    let is_self = viewer.is_some_and(|v| v.id == target.id);
    let is_moderator = viewer.is_some_and(User::is_moderator);
    let in_voice = target.voice.is_some();
    let muted = target.voice.is_some_and(|v| v.muted);
    match kind {
        UserActionKind::OpenChat => !is_self,
        UserActionKind::ClearStatus => target.emoji.is_some() && (is_moderator || is_self),
        UserActionKind::SetPresenter => is_moderator && !target.is_presenter,
        UserActionKind::Kick => is_moderator && !is_self && !roster.meeting.is_breakout_room,
        UserActionKind::Mute => in_voice && !muted && (is_moderator || is_self),
        UserActionKind::Unmute => in_voice && muted && is_self,
    }
}

/// Rows the current user may run against `target`, in table order.
pub fn available_for(roster: &Roster, target: &User) -> Vec<UserAction> {
    let viewer = roster.current_user();
    USER_ACTIONS.iter().copied().filter(|a| is_allowed(a.kind, roster, viewer, target)).collect()
}

/// Run `action` against the user with `user_id`.
pub(super) fn run(app: &mut App, action: UserAction, user_id: &str) {
    let Some(user) = app.roster.user(user_id) else {
        tracing::warn!(user_id, action = ?action.kind, "action target left before it ran");
        return;
    };
    match (action.handler)(user) {
        ActionEffect::Route(route) => {
            tracing::info!(route = %route, "navigate");
            app.status_line = Some(route.clone());
            app.route = Some(route);
        }
        ActionEffect::Call(call) => {
            tracing::info!(
                method = call.method,
                user_id = %call.user_id,
                args = ?call.args,
                "server call"
            );
            echo(&mut app.roster, &call);
            app.status_line = Some(format!("{}({})", call.method, call.user_id));
            app.outbox.push(call);
        }
    }
}

/// Reflect a call in the local roster the way the server would once it is processed.
fn echo(roster: &mut Roster, call: &ServerCall) {
    match call.method {
        "kickUser" => {
            roster.apply(RosterEvent::UserLeft(call.user_id.clone()));
        }
        "assignPresenter" => {
            for user in &mut roster.users {
                user.is_presenter = user.id == call.user_id;
            }
        }
        method => {
            let Some(user) = roster.user_mut(&call.user_id) else {
                return;
            };
            match method {
                "setEmojiStatus" => user.emoji = None,
                "muteUser" => user.voice = Some(Voice { muted: true }),
                "unmuteUser" => user.voice = Some(Voice { muted: false }),
                _ => {}
            }
        }
    }
}
