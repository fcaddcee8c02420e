use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::{Command, CommandError, Context, Status};

const COLUMN_WIDTH: usize = 20;

/// Lists a directory on one line, directories styled and marked with `/`.
///
/// Names are written as raw bytes and padded by byte length.
#[derive(Clone, Debug, Default)]
pub struct LsCommand;

impl Command for LsCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let dir = args.first().map(Path::new).unwrap_or(Path::new("."));

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let padding = COLUMN_WIDTH.saturating_sub(name.as_bytes().len());
            let is_dir = fs::metadata(entry.path())?.is_dir();

            if is_dir && ctx.highlighter.is_enabled() {
                let padded = format!("{}{:padding$}", name.to_string_lossy(), "");
                write!(ctx.out, "{}", ctx.highlighter.directory(&padded))?;
            } else {
                ctx.out.write_all(name.as_bytes())?;
                write!(ctx.out, "{:padding$}", "")?;
            }
            let suffix: &[u8] = if is_dir { b"/  " } else { b"  " };
            ctx.out.write_all(suffix)?;
        }

        writeln!(ctx.out)?;
        Ok(Status::Continue)
    }
}
