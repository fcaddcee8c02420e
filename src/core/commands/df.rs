use std::ffi::{CString, OsString};
use std::io::{self, Write};
use std::mem::MaybeUninit;

use super::{expect_no_args, Command, CommandError, Context, Status};

const ROOT: &str = "/";

#[derive(Clone, Debug, Default)]
pub struct DfCommand;

impl Command for DfCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        expect_no_args(args)?;
        let available = available_space(ROOT)?;
        writeln!(ctx.out, "Disk space available: {} bytes", available)?;
        Ok(Status::Continue)
    }
}

/// Bytes available to unprivileged users on the filesystem holding `path`.
fn available_space(path: &str) -> io::Result<u64> {
    let c_path =
        CString::new(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();

    // SAFETY: `c_path` is NUL-terminated and `stat` is only read after success.
    let stat = unsafe {
        if libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) != 0 {
            return Err(io::Error::last_os_error());
        }
        stat.assume_init()
    };

    Ok((stat.f_bavail as u64).saturating_mul(stat.f_frsize as u64))
}
