//! Viewer session
//!
//! Ties the search state, the detail panel and the map rotation together
//! and turns each command into text for the terminal.

use crate::command::{help_text, parse_command, Command};
use crate::dashboard::{render_dashboard, Dashboard};
use crate::error::SearchError;
use crate::map::{render_map, DetailPanel, Turntable};
use crate::models::UserData;
use crate::search::{SearchState, SearchTicket};

/// What the main loop should do after a command
#[derive(Debug, Default)]
pub struct Reply {
    pub output: String,
    /// A search to run in the background
    pub search: Option<SearchTicket>,
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct Session {
    search: SearchState,
    panel: DetailPanel,
    turntable: Turntable,
}

impl Session {
    pub fn new() -> Self {
        Self {
            search: SearchState::new(),
            panel: DetailPanel::Closed,
            turntable: Turntable::new(),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(command) => self.handle(command),
            Err(e) => Reply::text(format!("{}\nType :help for a list of commands.\n", e)),
        }
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Search(input) => match self.search.submit(&input) {
                Ok(ticket) => Reply {
                    output: format!("Loading GitHub data for {}...\n", ticket.username),
                    search: Some(ticket),
                    quit: false,
                },
                Err(e) => Reply::text(render_error(&e)),
            },
            Command::Open(target) => self.open(&target),
            Command::Close => {
                self.panel.dismiss();
                Reply::text("Detail panel closed.\n")
            }
            Command::Hover => {
                self.turntable.pointer_enter();
                Reply::text("Map rotation paused.\n")
            }
            Command::Leave => {
                self.turntable.pointer_leave();
                Reply::text("Map rotation resumed.\n")
            }
            Command::Dashboard => Reply::text(self.render_with(|data| {
                render_dashboard(&Dashboard::build(&data.profile, Some(&data.stats)))
            })),
            Command::Map => Reply::text(self.render_with(|data| {
                render_map(&data.repos, &self.turntable, &self.panel)
            })),
            Command::Help => Reply::text(help_text()),
            Command::Quit => Reply {
                quit: true,
                ..Reply::default()
            },
        }
    }

    /// Apply the outcome of search `seq`; returns the new view when it was
    /// the latest search
    pub fn apply_result(
        &mut self,
        seq: u64,
        outcome: Result<UserData, SearchError>,
    ) -> Option<String> {
        if !self.search.resolve(seq, outcome) {
            return None;
        }

        self.panel.dismiss();
        Some(self.render())
    }

    /// Whether the latest search is still waiting for its response
    pub fn is_loading(&self) -> bool {
        self.search.is_loading()
    }

    /// Advance the map animation by one frame
    pub fn tick(&mut self) {
        self.turntable.tick();
    }

    /// Full view: loading line, error panel, or dashboard plus map
    pub fn render(&self) -> String {
        self.render_with(|data| {
            let mut buf =
                render_dashboard(&Dashboard::build(&data.profile, Some(&data.stats)));
            buf.push('\n');
            buf.push_str(&render_map(&data.repos, &self.turntable, &self.panel));
            buf
        })
    }

    #[cfg(test)]
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    #[cfg(test)]
    pub fn panel(&self) -> DetailPanel {
        self.panel
    }

    #[cfg(test)]
    pub fn turntable(&self) -> &Turntable {
        &self.turntable
    }

    fn render_with(&self, view: impl FnOnce(&UserData) -> String) -> String {
        if self.search.is_loading() {
            return format!("Loading GitHub data for {}...\n", self.search.query());
        }
        if let Some(err) = self.search.error() {
            return render_error(err);
        }
        match self.search.result() {
            Some(data) => view(data),
            None => "No results yet. Type a GitHub username to search.\n".to_string(),
        }
    }

    fn open(&mut self, target: &str) -> Reply {
        if self.search.is_loading() {
            return Reply::text(format!(
                "Still loading GitHub data for {}. Wait for the result before opening a repository.\n",
                self.search.query()
            ));
        }

        let Some(data) = self.search.result() else {
            return Reply::text("Nothing to open yet. Search for a user first.\n");
        };

        let index = data
            .repos
            .iter()
            .position(|r| r.name == target)
            .or_else(|| {
                target
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=data.repos.len()).contains(n))
                    .map(|n| n - 1)
            });

        match index {
            Some(index) => {
                self.panel.click(index);
                Reply::text(self.render_with(|data| {
                    render_map(&data.repos, &self.turntable, &self.panel)
                }))
            }
            None => Reply::text(format!("No repository named or numbered '{}'.\n", target)),
        }
    }
}

/// Error panel with remediation text for the error's category
pub fn render_error(err: &SearchError) -> String {
    let mut buf = format!("## Error: {}\n\n{}\n", err.category.title(), err.message);
    if let Some(details) = &err.details {
        buf.push_str(&format!("Details: {}\n", details));
    }
    buf.push('\n');
    buf.push_str(err.category.remediation());
    buf.push('\n');
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::test_support::user_data;

    fn session_with(login: &str, repos: &[(&str, Option<&str>, u64)]) -> Session {
        let mut session = Session::new();
        let ticket = session.handle_line(login).search.unwrap();
        session
            .apply_result(ticket.seq, Ok(user_data(login, repos)))
            .unwrap();
        session
    }

    #[test]
    fn search_returns_ticket_and_loading_text() {
        let mut session = Session::new();

        let reply = session.handle_line("octocat");

        let ticket = reply.search.unwrap();
        assert_eq!(ticket.username, "octocat");
        assert!(reply.output.contains("Loading"));
        assert!(session.render().contains("Loading GitHub data for octocat"));
    }

    #[test]
    fn blank_search_sends_nothing_and_keeps_results() {
        let mut session = session_with("octocat", &[("a", Some("Rust"), 1)]);

        let reply = session.handle_line("   ");

        assert!(reply.search.is_none());
        assert!(reply.output.contains("Enter a username"));
        assert_eq!(
            session.search_state().result().unwrap().profile.login,
            "octocat"
        );
    }

    #[test]
    fn result_renders_dashboard_and_map() {
        let session = session_with("octocat", &[("a", Some("Rust"), 1), ("b", None, 2)]);

        let out = session.render();

        assert!(out.contains("# octocat (test) (@octocat)"));
        assert!(out.contains("## Top Languages"));
        assert!(out.contains("## Repository Map"));
    }

    #[test]
    fn clicking_a_then_b_leaves_only_b_open() {
        let mut session = session_with("octocat", &[("alpha", None, 1), ("beta", None, 2)]);

        session.handle_line(":open alpha");
        let reply = session.handle_line(":open beta");

        assert_eq!(session.panel(), DetailPanel::Open(1));
        assert!(reply.output.contains("### beta"));
        assert!(!reply.output.contains("### alpha"));
    }

    #[test]
    fn open_by_number_and_close() {
        let mut session = session_with("octocat", &[("alpha", None, 1), ("beta", None, 2)]);

        session.handle_line(":open 1");
        assert_eq!(session.panel(), DetailPanel::Open(0));

        session.handle_line(":close");
        assert_eq!(session.panel(), DetailPanel::Closed);
    }

    #[test]
    fn open_unknown_repository_keeps_panel() {
        let mut session = session_with("octocat", &[("alpha", None, 1)]);
        session.handle_line(":open alpha");

        let reply = session.handle_line(":open 9");

        assert!(reply.output.contains("No repository"));
        assert_eq!(session.panel(), DetailPanel::Open(0));
    }

    #[test]
    fn open_is_rejected_while_loading() {
        let mut session = session_with("octocat", &[("alpha", None, 1), ("beta", None, 2)]);
        session.handle_line(":open alpha");
        session.handle_line("hubot");

        let reply = session.handle_line(":open beta");

        assert!(reply.output.contains("Still loading GitHub data for hubot"));
        assert_eq!(session.panel(), DetailPanel::Open(0));
        assert!(session.is_loading());
    }

    #[test]
    fn open_before_any_search() {
        let mut session = Session::new();

        let reply = session.handle_line(":open alpha");

        assert!(reply.output.contains("Search for a user first"));
        assert_eq!(session.panel(), DetailPanel::Closed);
    }

    #[test]
    fn new_result_closes_panel() {
        let mut session = session_with("octocat", &[("alpha", None, 1)]);
        session.handle_line(":open alpha");

        let ticket = session.handle_line("hubot").search.unwrap();
        session.apply_result(ticket.seq, Ok(user_data("hubot", &[("x", None, 0)])));

        assert_eq!(session.panel(), DetailPanel::Closed);
    }

    #[test]
    fn error_clears_results_and_shows_remediation() {
        let mut session = session_with("octocat", &[("alpha", None, 1)]);
        let ticket = session.handle_line("someone").search.unwrap();

        let out = session
            .apply_result(
                ticket.seq,
                Err(SearchError::new(
                    ErrorCategory::RateLimited,
                    "Rate limit exceeded. Please try again later.",
                )
                .with_details(Some("API rate limit exceeded".to_string()))),
            )
            .unwrap();

        assert!(out.contains("## Error: Rate limit exceeded"));
        assert!(out.contains("Details: API rate limit exceeded"));
        assert!(out.contains("GITHUB_TOKEN"));
        assert!(session.search_state().result().is_none());
        assert!(session.handle_line(":dashboard").output.contains("## Error"));
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut session = Session::new();
        let slow = session.handle_line("alice").search.unwrap();
        let fast = session.handle_line("bob").search.unwrap();

        assert!(session
            .apply_result(fast.seq, Ok(user_data("bob", &[])))
            .is_some());
        assert!(session
            .apply_result(slow.seq, Ok(user_data("alice", &[])))
            .is_none());

        assert_eq!(session.search_state().result().unwrap().profile.login, "bob");
    }

    #[test]
    fn hover_pauses_ticks() {
        let mut session = Session::new();
        session.tick();
        let angle = session.turntable().angle();

        session.handle_line(":hover");
        session.tick();
        assert_eq!(session.turntable().angle(), angle);

        session.handle_line(":leave");
        session.tick();
        assert!(session.turntable().angle() > angle);
    }

    #[test]
    fn quit_and_unknown_commands() {
        let mut session = Session::new();

        assert!(session.handle_line(":quit").quit);
        assert!(session
            .handle_line(":bogus")
            .output
            .contains("Unknown command: bogus"));
    }
}
