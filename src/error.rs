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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Roster file not found")]
    RosterNotFound,
    #[error("Roster file is invalid")]
    RosterInvalid,
    #[error("Terminal unavailable")]
    TerminalUnavailable,
}

impl AppError {
    pub const ROSTER_NOT_FOUND_EXIT_CODE: i32 = 20;
    pub const ROSTER_INVALID_EXIT_CODE: i32 = 21;
    pub const TERMINAL_UNAVAILABLE_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RosterNotFound => Self::ROSTER_NOT_FOUND_EXIT_CODE,
            Self::RosterInvalid => Self::ROSTER_INVALID_EXIT_CODE,
            Self::TerminalUnavailable => Self::TERMINAL_UNAVAILABLE_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RosterNotFound => "The roster file passed with `--roster` could not be read.",
            Self::RosterInvalid => {
                "The roster file is not valid JSON or is missing required fields."
            }
            Self::TerminalUnavailable => {
                "Could not take over the terminal. Run `roster` from an interactive terminal."
            }
        }
    }
}
