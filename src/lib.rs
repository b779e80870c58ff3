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

pub mod app;
pub mod error;
pub mod nav;
pub mod roster;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Keyboard-navigable meeting roster for the terminal")]
pub struct Cli {
    /// Compact layout: no pane titles, no keyboard navigation through the lists
    #[arg(long)]
    pub compact: bool,

    /// Load the roster from a JSON file instead of the built-in sample
    #[arg(long, short, value_name = "PATH")]
    pub roster: Option<std::path::PathBuf>,

    /// Replay scripted joins, leaves and messages while running
    #[arg(long)]
    pub simulate: bool,

    /// Interval between simulated roster events
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    pub simulate_ms: u64,

    /// Write tracing diagnostics to this file (disabled when omitted)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (e.g. `info,roster_tui::nav=trace`); falls back to `RUST_LOG`
    #[arg(long, value_name = "DIRECTIVES")]
    pub log_filter: Option<String>,

    /// Append to --log-file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["roster"]);
        assert!(!cli.compact);
        assert!(!cli.simulate);
        assert_eq!(cli.simulate_ms, 2000);
        assert!(cli.roster.is_none());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from([
            "roster",
            "--compact",
            "-r",
            "meeting.json",
            "--simulate",
            "--simulate-ms",
            "250",
            "--log-file",
            "roster.log",
            "--log-append",
        ]);
        assert!(cli.compact);
        assert_eq!(cli.roster.as_deref(), Some(std::path::Path::new("meeting.json")));
        assert_eq!(cli.simulate_ms, 250);
        assert!(cli.log_append);
    }
}
