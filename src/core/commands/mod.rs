use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;

use log::debug;
use thiserror::Error;

mod builtin;
mod cd;
mod df;
mod files;
mod history;
mod ls;

pub use builtin::{ClearCommand, EchoCommand, ExitCommand, HelpCommand};
pub use cd::CdCommand;
pub use df::DfCommand;
pub use files::{CatCommand, CpCommand, MvCommand, TouchCommand};
pub use history::{ClearHistoryCommand, HistoryCommand};
pub use ls::LsCommand;

use crate::highlight::Highlighter;
use crate::input::History;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("too many arguments")]
    TooManyArguments,
    #[error("wrong number of arguments")]
    WrongArgumentCount,
    #[error("home directory not found")]
    HomeDirNotFound,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    Exit,
}

/// Session state a builtin may read or change.
pub struct Context<'a> {
    pub out: &'a mut dyn Write,
    pub history: &'a mut History,
    pub highlighter: &'a Highlighter,
}

pub trait Command {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError>;

    /// Whether a successful invocation is appended to the history.
    /// Failed invocations are always recorded.
    fn records_history(&self) -> bool {
        true
    }
}

/// Fails with [`CommandError::TooManyArguments`] unless `args` is empty.
pub(crate) fn expect_no_args(args: &[OsString]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::TooManyArguments)
    }
}

#[derive(Clone, Debug)]
pub enum CommandType {
    Cd(CdCommand),
    Ls(LsCommand),
    Touch(TouchCommand),
    Cp(CpCommand),
    Mv(MvCommand),
    History(HistoryCommand),
    ClearHistory(ClearHistoryCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    Echo(EchoCommand),
    Cat(CatCommand),
    Df(DfCommand),
    Clear(ClearCommand),
}

impl CommandType {
    fn as_command(&self) -> &dyn Command {
        match self {
            CommandType::Cd(cmd) => cmd,
            CommandType::Ls(cmd) => cmd,
            CommandType::Touch(cmd) => cmd,
            CommandType::Cp(cmd) => cmd,
            CommandType::Mv(cmd) => cmd,
            CommandType::History(cmd) => cmd,
            CommandType::ClearHistory(cmd) => cmd,
            CommandType::Exit(cmd) => cmd,
            CommandType::Help(cmd) => cmd,
            CommandType::Echo(cmd) => cmd,
            CommandType::Cat(cmd) => cmd,
            CommandType::Df(cmd) => cmd,
            CommandType::Clear(cmd) => cmd,
        }
    }
}

impl Command for CommandType {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        self.as_command().execute(args, ctx)
    }

    fn records_history(&self) -> bool {
        self.as_command().records_history()
    }
}

/// Builtin name lookup, filled once at startup.
#[derive(Clone, Debug)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands = BTreeMap::from([
            ("cd", CommandType::Cd(CdCommand)),
            ("ls", CommandType::Ls(LsCommand)),
            ("touch", CommandType::Touch(TouchCommand)),
            ("cp", CommandType::Cp(CpCommand)),
            ("mv", CommandType::Mv(MvCommand)),
            ("hs", CommandType::History(HistoryCommand)),
            ("clrhs", CommandType::ClearHistory(ClearHistoryCommand)),
            ("exit", CommandType::Exit(ExitCommand)),
            ("help", CommandType::Help(HelpCommand)),
            ("echo", CommandType::Echo(EchoCommand)),
            ("cat", CommandType::Cat(CatCommand)),
            ("df", CommandType::Df(DfCommand)),
            ("clear", CommandType::Clear(ClearCommand)),
        ]);
        debug!("registered {} builtins", commands.len());

        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&CommandType> {
        self.commands.get(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
