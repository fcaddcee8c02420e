use std::ffi::OsString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use super::{expect_no_args, Command, CommandError, Context, Status};

#[derive(Clone, Debug, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        expect_no_args(args)?;
        for entry in ctx.history.entries() {
            ctx.out.write_all(entry.as_bytes())?;
            ctx.out.write_all(b"\n")?;
        }
        Ok(Status::Continue)
    }
}

/// Empties the history. A successful invocation is not recorded.
#[derive(Clone, Debug, Default)]
pub struct ClearHistoryCommand;

impl Command for ClearHistoryCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        expect_no_args(args)?;
        ctx.history.clear();
        Ok(Status::Continue)
    }

    fn records_history(&self) -> bool {
        false
    }
}
