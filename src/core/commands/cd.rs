use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use super::{Command, CommandError, Context, Status};

#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[OsString], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::TooManyArguments);
        }

        let target = match args.first() {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir().ok_or(CommandError::HomeDirNotFound)?,
        };

        env::set_current_dir(&target)?;
        Ok(Status::Continue)
    }
}
