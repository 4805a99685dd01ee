use thiserror::Error;

use crate::model::{EditField, MemberId};
use crate::pagination::PageTarget;
use crate::table::Action;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Apply(Vec<Action>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unknown field '{0}', expected name, email or role")]
    UnknownField(String),

    #[error("{0}")]
    InvalidPage(String),
}

pub const HELP: &str = "\
commands:
  show                      redraw the table
  search [TEXT]             filter by TEXT (empty shows everything)
  query TEXT                type TEXT into the search box without applying it
  page N|first|prev|next|last
  select ID                 toggle the checkbox of row ID
  select-all                toggle the header checkbox
  delete-selected           delete every checked row
  edit ID                   start editing row ID
  set name|email|role VALUE change a field of the row being edited
  save | cancel             finish editing
  delete ID                 delete row ID
  help | quit";

/// Splits off the command word. The remainder is returned untouched.
fn split_head(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}

fn require<'a>(
    value: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(value)
    }
}

/// Parses one shell line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (head, raw) = split_head(line);
    let rest = raw.trim();
    let command = match head.to_lowercase().as_str() {
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "search" => Command::Apply(vec![
            Action::SetSearchTerm(raw.to_string()),
            Action::Search,
        ]),
        "query" => Command::Apply(vec![Action::SetSearchTerm(raw.to_string())]),
        "page" => {
            let raw = require(rest, "page", "a number or first|prev|next|last")?;
            let target = PageTarget::parse(raw).map_err(CommandError::InvalidPage)?;
            Command::Apply(vec![Action::GoToPage(target)])
        }
        "first" => Command::Apply(vec![Action::GoToPage(PageTarget::First)]),
        "prev" => Command::Apply(vec![Action::GoToPage(PageTarget::Previous)]),
        "next" => Command::Apply(vec![Action::GoToPage(PageTarget::Next)]),
        "last" => Command::Apply(vec![Action::GoToPage(PageTarget::Last)]),
        "select" => {
            let id = require(rest, "select", "a member id")?;
            Command::Apply(vec![Action::ToggleRow(MemberId::from(id))])
        }
        "select-all" => Command::Apply(vec![Action::ToggleAll]),
        "delete-selected" => Command::Apply(vec![Action::DeleteSelected]),
        "edit" => {
            let id = require(rest, "edit", "a member id")?;
            Command::Apply(vec![Action::Edit(MemberId::from(id))])
        }
        "set" => {
            let args = require(rest, "set", "a field and a value")?;
            let (field, value) = split_head(args);
            let field =
                EditField::parse(field).ok_or_else(|| CommandError::UnknownField(field.to_string()))?;
            Command::Apply(vec![Action::SetField(field, value.trim().to_string())])
        }
        "save" => Command::Apply(vec![Action::Save]),
        "cancel" => Command::Apply(vec![Action::Cancel]),
        "delete" => {
            let id = require(rest, "delete", "a member id")?;
            Command::Apply(vec![Action::DeleteRow(MemberId::from(id))])
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
