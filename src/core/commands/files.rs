use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};

use super::{Command, CommandError, Context, Status};

/// Creates missing files; existing files are opened for append and left as is.
#[derive(Clone, Debug, Default)]
pub struct TouchCommand;

impl Command for TouchCommand {
    fn execute(&self, args: &[OsString], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        for filename in args {
            OpenOptions::new().append(true).create(true).open(filename)?;
        }
        Ok(Status::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CpCommand;

impl Command for CpCommand {
    fn execute(&self, args: &[OsString], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let [src, dst] = args else {
            return Err(CommandError::WrongArgumentCount);
        };

        // The source must open before the destination is created or truncated.
        let mut src_file = File::open(src)?;
        let mut dst_file = File::create(dst)?;
        io::copy(&mut src_file, &mut dst_file)?;
        Ok(Status::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MvCommand;

impl Command for MvCommand {
    fn execute(&self, args: &[OsString], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        let [src, dst] = args else {
            return Err(CommandError::WrongArgumentCount);
        };

        fs::rename(src, dst)?;
        Ok(Status::Continue)
    }
}

/// Prints files line by line, each line terminated with `\n`.
#[derive(Clone, Debug, Default)]
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        for filename in args {
            let reader = BufReader::new(File::open(filename)?);
            for line in reader.split(b'\n') {
                ctx.out.write_all(&line?)?;
                ctx.out.write_all(b"\n")?;
            }
        }
        Ok(Status::Continue)
    }
}
