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

pub mod actions;
mod activation;
mod events;
mod focus;
mod keys;
pub mod simulate;
mod state;
mod surface;

pub use activation::{activate, navigate, run_menu_action};
pub use events::{handle_roster_event, handle_terminal_event};
pub use focus::{KeyContext, KeyFocusManager, KeyOwner, KeyTarget};
pub use keys::dispatch_key;
pub use state::{ActionMenu, App, PaneFocus, Panes};

use crate::Cli;
use crate::error::AppError;
use crate::roster::Roster;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

pub fn create_app(cli: &Cli, roster: Roster) -> App {
    let app = App::new(roster, cli.compact);
    tracing::info!(
        compact = cli.compact,
        chats = app.roster.open_chats.len(),
        users = app.roster.users.len(),
        "app created"
    );
    app
}

/// Start the scripted roster churn when `--simulate` is set.
pub fn start_simulation(app: &App, cli: &Cli) -> Option<tokio::task::JoinHandle<()>> {
    if !cli.simulate {
        return None;
    }
    let period = Duration::from_millis(cli.simulate_ms.max(1));
    tracing::info!(period_ms = cli.simulate_ms, "roster simulation started");
    Some(simulate::spawn(app.event_tx.clone(), period))
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| {
        tracing::error!(error = %e, "failed to initialize terminal");
        anyhow::Error::new(AppError::TerminalUnavailable)
    })?;

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                handle_terminal_event(app, event);
            }
            Some(event) = app.event_rx.recv() => {
                handle_roster_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Terminal events first, keeps navigation responsive
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => handle_roster_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: render once
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(anyhow::Error::new(e));
        }
        last_render = Instant::now();
    };

    ratatui::restore();
    result
}
