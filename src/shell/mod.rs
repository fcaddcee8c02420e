use std::io::{BufRead, Write};

use log::debug;

mod executor;

pub use executor::Session;

use crate::{
    core::commands::Status,
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{read_line, tokenize},
};

const PROMPT: &str = "> ";

/// Settings for the interactive loop, derived from the command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub show_prompt: bool,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_prompt: true,
            color: false,
        }
    }
}

impl ShellConfig {
    /// `color_capable` reports whether stdout is a terminal that can show colour.
    pub fn from_flags(flags: &Flags, color_capable: bool) -> Self {
        Self {
            show_prompt: !flags.quiet,
            color: !flags.no_color && color_capable,
        }
    }
}

pub struct Shell {
    config: ShellConfig,
    highlighter: Highlighter,
    session: Session,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let highlighter = if config.color {
            Highlighter::detect()
        } else {
            Highlighter::plain()
        };

        Shell {
            config,
            highlighter,
            session: Session::new(highlighter),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads and dispatches lines until `exit` or end of input.
    pub fn run<R, W, E>(&mut self, mut input: R, mut out: W, mut err: E) -> Result<(), ShellError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        loop {
            if self.config.show_prompt {
                write!(out, "{}", self.highlighter.prompt(PROMPT))?;
                out.flush()?;
            }

            let line = match read_line(&mut input).map_err(ShellError::Input)? {
                Some(line) => line,
                None => {
                    debug!("end of input");
                    break;
                }
            };

            let tokens = tokenize(&line);
            let status = self.session.execute(&tokens, &mut out, &mut err)?;
            err.flush()?;
            if status == Status::Exit {
                debug!("exit requested");
                break;
            }
        }

        out.flush()?;
        Ok(())
    }
}
