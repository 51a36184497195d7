//! Line-oriented driver for an [`ApplicationCoordinator`].
//!
//! Each input line stands for one user action on the screen that is
//! currently on top (a button press, a submitted field, a picker row).

use thiserror::Error;

use crate::coordinator::ApplicationCoordinator;
use crate::error::FlowError;
use crate::model::Article;
use crate::navigation::Navigator;
use crate::session::SessionStore;

pub const HELP: &str = "\
commands:
  login                 log in from the login screen
  signup                start signing up
  next <value>          submit the current signup field (may be empty)
  region <index|name>   pick a region on the region step
  cancel                back out of signup
  open <id> [title]     open an article from the list
  back                  close the open article
  logout                log out and return to login
  status                show mode and session flag
  help                  show this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionChoice {
    Index(usize),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login,
    Signup,
    Next(String),
    Region(RegionChoice),
    Cancel,
    Open(Article),
    Back,
    Logout,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// Parse one input line.
///
/// Everything after the first whitespace character is the argument, kept
/// verbatim so that signup values may contain spaces or be empty.
pub fn parse_line(line: &str) -> Result<ShellCommand, ShellError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Err(ShellError::Empty);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest)),
        None => (trimmed, None),
    };

    match word.to_ascii_lowercase().as_str() {
        "login" => Ok(ShellCommand::Login),
        "signup" => Ok(ShellCommand::Signup),
        "next" => Ok(ShellCommand::Next(rest.unwrap_or_default().to_string())),
        "region" => {
            let arg = rest.map(str::trim).filter(|a| !a.is_empty()).ok_or(
                ShellError::MissingArgument {
                    command: "region",
                    argument: "picker index or region name",
                },
            )?;
            let choice = match arg.parse::<usize>() {
                Ok(index) => RegionChoice::Index(index),
                Err(_) => RegionChoice::Name(arg.to_string()),
            };
            Ok(ShellCommand::Region(choice))
        }
        "cancel" => Ok(ShellCommand::Cancel),
        "open" => {
            let arg = rest.map(str::trim).filter(|a| !a.is_empty()).ok_or(
                ShellError::MissingArgument {
                    command: "open",
                    argument: "article id",
                },
            )?;
            let article = match arg.split_once(char::is_whitespace) {
                Some((id, title)) => Article::new(id, title.trim()),
                None => Article::new(arg, arg),
            };
            Ok(ShellCommand::Open(article))
        }
        "back" => Ok(ShellCommand::Back),
        "logout" => Ok(ShellCommand::Logout),
        "status" => Ok(ShellCommand::Status),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        _ => Err(ShellError::UnknownCommand(word.to_string())),
    }
}

/// What the driver loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    Continue,
    Quit,
}

/// Apply a parsed command to the coordinator tree.
pub fn execute<S: SessionStore, N: Navigator>(
    app: &mut ApplicationCoordinator<S, N>,
    command: ShellCommand,
) -> Result<ShellOutcome, FlowError> {
    match command {
        ShellCommand::Login => app.log_in()?,
        ShellCommand::Signup => app.request_signup()?,
        ShellCommand::Next(value) => app.advance_signup(value)?,
        ShellCommand::Region(RegionChoice::Index(index)) => app.choose_region(index)?,
        ShellCommand::Region(RegionChoice::Name(name)) => app.advance_signup(name)?,
        ShellCommand::Cancel => app.cancel_signup()?,
        ShellCommand::Open(article) => app.select_article(article)?,
        ShellCommand::Back => app.close_article()?,
        ShellCommand::Logout => app.log_out()?,
        ShellCommand::Status | ShellCommand::Help => {}
        ShellCommand::Quit => return Ok(ShellOutcome::Quit),
    }
    Ok(ShellOutcome::Continue)
}
