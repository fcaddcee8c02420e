use std::ffi::OsString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use super::{expect_no_args, Command, CommandError, Context, Status};

const HELP: &str = "\
Available commands:
  cd [path]     - Change the current working directory
  ls [path]     - List files and directories in the specified path
  touch [files] - Create new empty files
  cp [src] [dst] - Copy a file from source to destination
  mv [src] [dst] - Move a file or directory from source to destination
  hs            - Show command history
  clrhs         - Clear command history
  exit          - Exit the shell
  help          - Display this help message
  echo [args]   - Print the arguments to the console
  cat [files]   - Print the contents of files to the console
  df            - Show available disk space
  clear         - Clear the console screen
Other built-in Unix commands can also be run if they exist in the PATH.
";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, args: &[OsString], _ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        expect_no_args(args)?;
        Ok(Status::Exit)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        expect_no_args(args)?;
        ctx.out.write_all(HELP.as_bytes())?;
        Ok(Status::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        for arg in args {
            ctx.out.write_all(arg.as_bytes())?;
            ctx.out.write_all(b" ")?;
        }
        writeln!(ctx.out)?;
        Ok(Status::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, args: &[OsString], ctx: &mut Context<'_>) -> Result<Status, CommandError> {
        expect_no_args(args)?;
        ctx.out.write_all(CLEAR_SCREEN.as_bytes())?;
        Ok(Status::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::run;
    use crate::input::History;

    #[test]
    fn test_exit_command() {
        let mut history = History::new();
        let (result, out) = run(&ExitCommand, &[], &mut history);
        assert_eq!(result.unwrap(), Status::Exit);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_with_argument_does_not_exit() {
        let mut history = History::new();
        let (result, _) = run(&ExitCommand, &["0"], &mut history);
        assert!(matches!(result, Err(CommandError::TooManyArguments)));
    }

    #[test]
    fn test_echo_keeps_trailing_space() {
        let mut history = History::new();
        let (result, out) = run(&EchoCommand, &["hello", "world"], &mut history);
        assert_eq!(result.unwrap(), Status::Continue);
        assert_eq!(out, "hello world \n");

        let (_, out) = run(&EchoCommand, &[], &mut history);
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_echo_writes_raw_bytes() {
        use std::ffi::OsStr;

        let mut history = History::new();
        let (_, out) = crate::core::commands::test_support::run_bytes(
            &EchoCommand,
            &[OsStr::from_bytes(b"caf\xe9")],
            &mut history,
        );
        assert_eq!(out, b"caf\xe9 \n".to_vec());
    }

    #[test]
    fn test_help_lists_every_builtin() {
        let mut history = History::new();
        let (result, out) = run(&HelpCommand, &[], &mut history);
        assert!(result.is_ok());
        for name in super::super::CommandRegistry::new().names() {
            assert!(out.contains(&format!("  {} ", name)), "help misses {}", name);
        }
        assert!(out.contains("PATH"));
    }

    #[test]
    fn test_help_and_clear_reject_arguments() {
        let mut history = History::new();
        let (result, out) = run(&HelpCommand, &["cd"], &mut history);
        assert!(matches!(result, Err(CommandError::TooManyArguments)));
        assert!(out.is_empty());

        let (result, out) = run(&ClearCommand, &["now"], &mut history);
        assert!(matches!(result, Err(CommandError::TooManyArguments)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_clear_writes_escape_sequence() {
        let mut history = History::new();
        let (_, out) = run(&ClearCommand, &[], &mut history);
        assert_eq!(out, "\x1b[2J\x1b[1;1H");
    }
}
