use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{self, Command};
use crate::output::{self, OutputFormat};
use crate::table::{Outcome, TableState};
use crate::view;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// Owns the table state and turns shell lines into rendered output.
#[derive(Clone, Debug)]
pub struct Session {
    state: TableState,
    format: OutputFormat,
}

impl Session {
    pub fn new(state: TableState, format: OutputFormat) -> Self {
        Self { state, format }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn into_state(self) -> TableState {
        self.state
    }

    pub fn render(&self) -> String {
        output::render(&view::derive_view(&self.state), self.format)
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Step::Continue(String::new()),
            Err(e) => return Step::Continue(format!("{} {e}\n", "!!".bold().red())),
        };
        match command {
            Command::Quit => Step::Quit,
            Command::Help => Step::Continue(format!("{}\n", command::HELP)),
            Command::Show => Step::Continue(self.render()),
            Command::Apply(actions) => {
                let mut out = String::new();
                let mut applied = false;
                for action in actions {
                    match self.state.apply(action) {
                        Outcome::Applied => applied = true,
                        Outcome::Ignored(reason) => {
                            out.push_str(&format!("{} {reason}\n", "!!".bold().yellow()));
                        }
                    }
                }
                if applied {
                    out.push_str(&self.render());
                }
                Step::Continue(out)
            }
        }
    }
}

/// Feeds every line of `input` to the session until EOF or `quit`.
pub async fn run_session<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "{}", session.render()).map_err(|e| format!("failed to write output: {e}"))?;
    loop {
        if prompt {
            write!(out, "> ").map_err(|e| format!("failed to write output: {e}"))?;
            out.flush()
                .map_err(|e| format!("failed to flush output: {e}"))?;
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("failed to read input: {e}")),
        };
        match session.handle_line(&line) {
            Step::Quit => break,
            Step::Continue(text) => {
                write!(out, "{text}").map_err(|e| format!("failed to write output: {e}"))?;
            }
        }
    }
    Ok(())
}
