//! Line commands for the `amount_shell` REPL.
//!
//! Anything not starting with `:` is typed into the field as-is. Parsing and
//! execution are kept apart from the terminal so both can be tested.

use crate::core::{
    config::ConfigError,
    obs::metrics_report,
    session::{AmountChange, AmountSession},
};
use thiserror::Error as ThisError;

pub const HELP: &str = "\
<text>         type <text> into the field
:decimals N    switch the asset's decimals
:set VALUE     force a base-unit value in
:reset         reset the field
:clear         clear the field as if the user deleted everything
:state         show display, value and decimals
:metrics       show counters for this shell
:help          show this help
:quit          exit";

///
/// ShellError
///

#[derive(Debug, ThisError)]
pub enum ShellError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode metrics: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

///
/// CommandError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum CommandError {
    #[error("unknown command ':{0}', try :help")]
    Unknown(String),

    #[error(":{command} expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("decimals must be a non-negative integer, got '{0}'")]
    InvalidDecimals(String),
}

///
/// Command
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Edit(String),
    Decimals(u32),
    Set(String),
    Reset,
    Clear,
    State,
    Metrics,
    Help,
    Quit,
}

/// Parse one input line.
///
/// Only command lines are trimmed; edits reach the session exactly as typed.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let Some(rest) = line.trim().strip_prefix(':') else {
        return Ok(Command::Edit(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "decimals" | "d" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "decimals",
                    expected: "a number",
                });
            }

            arg.parse()
                .map(Command::Decimals)
                .map_err(|_| CommandError::InvalidDecimals(arg.to_string()))
        }

        "set" | "s" => {
            if arg.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    expected: "a base-unit value",
                });
            }

            Ok(Command::Set(arg.to_string()))
        }

        "reset" => Ok(Command::Reset),
        "clear" | "c" => Ok(Command::Clear),
        "state" => Ok(Command::State),
        "metrics" | "m" => Ok(Command::Metrics),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Run a command against the session and return the text to print.
pub fn run_command(session: &mut AmountSession, command: &Command) -> Result<String, ShellError> {
    let out = match command {
        Command::Edit(text) => describe(Some(session.on_user_edit(text)), session),
        Command::Decimals(decimals) => describe(session.on_decimals_changed(*decimals), session),
        Command::Set(value) => describe(session.force_set(Some(value)), session),
        Command::Reset => describe(session.force_set(None), session),
        Command::Clear => describe(Some(session.on_user_edit("")), session),
        Command::State => state(session),
        Command::Metrics => serde_json::to_string_pretty(&metrics_report())?,
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };

    Ok(out)
}

fn describe(change: Option<AmountChange>, session: &AmountSession) -> String {
    match change {
        Some(change) => format!(
            "{} value=\"{}\" display=\"{}\"",
            change.origin,
            change.value,
            session.display()
        ),
        None => format!("no change display=\"{}\"", session.display()),
    }
}

fn state(session: &AmountSession) -> String {
    format!(
        "display=\"{}\" value=\"{}\" decimals={} dirty={} max_len={}",
        session.display(),
        session.value(),
        session.decimals(),
        session.is_dirty(),
        session.max_input_len(),
    )
}

///
/// TESTS
///
