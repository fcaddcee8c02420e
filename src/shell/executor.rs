use std::ffi::OsString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use log::debug;

use crate::core::commands::{Command, CommandRegistry, Context, Status};
use crate::error::ShellError;
use crate::highlight::Highlighter;
use crate::input::History;
use crate::process::ProcessLauncher;

const EMPTY_LINE_NUDGE: &str = "Please enter something :)";

/// Registry, history and launcher shared by every dispatched command.
#[derive(Debug)]
pub struct Session {
    registry: CommandRegistry,
    history: History,
    launcher: ProcessLauncher,
    highlighter: Highlighter,
}

impl Session {
    pub fn new(highlighter: Highlighter) -> Self {
        Self {
            registry: CommandRegistry::new(),
            history: History::new(),
            launcher: ProcessLauncher::new(),
            highlighter,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs one tokenized line: a builtin if the first token names one,
    /// otherwise an external program.
    ///
    /// Command failures are reported on `out`/`err` and never end the session;
    /// an `Err` means the output streams themselves failed.
    pub fn execute(
        &mut self,
        tokens: &[OsString],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Status, ShellError> {
        let Some((name, args)) = tokens.split_first() else {
            writeln!(out, "{}", EMPTY_LINE_NUDGE)?;
            return Ok(Status::Continue);
        };

        if let Some(command) = name.to_str().and_then(|n| self.registry.get(n)) {
            debug!("dispatching builtin {:?}", name);
            let mut ctx = Context {
                out: &mut *out,
                history: &mut self.history,
                highlighter: &self.highlighter,
            };
            let result = command.execute(args, &mut ctx);
            if result.is_err() || command.records_history() {
                self.history.record(name, args);
            }
            return match result {
                Ok(status) => Ok(status),
                Err(e) => {
                    writeln!(err, "{}: {}", name.to_string_lossy(), e)?;
                    Ok(Status::Continue)
                }
            };
        }

        debug!("launching external command {:?}", name);
        out.flush()?;
        match self.launcher.launch(tokens) {
            Ok(code) => {
                if code != 0 {
                    debug!("{:?} exited with status {}", name, code);
                }
                self.history.record(name, args);
            }
            Err(e) => {
                debug!("launch failed: {}", e);
                out.write_all(b"Command not found: ")?;
                out.write_all(name.as_bytes())?;
                writeln!(out)?;
            }
        }
        Ok(Status::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::CwdGuard;
    use crate::input::tokenize;
    use serial_test::serial;
    use std::env;
    use std::ffi::OsStr;
    use std::fs;

    struct Outcome {
        status: Status,
        out: String,
        err: String,
    }

    fn exec(session: &mut Session, line: &str) -> Outcome {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = session
            .execute(&tokenize(line.as_bytes()), &mut out, &mut err)
            .unwrap();
        Outcome {
            status,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn exec_tokens(session: &mut Session, tokens: &[&str]) -> Outcome {
        let tokens: Vec<OsString> = tokens.iter().map(OsString::from).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = session.execute(&tokens, &mut out, &mut err).unwrap();
        Outcome {
            status,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    fn session() -> Session {
        Session::new(Highlighter::plain())
    }

    fn history_lines(session: &Session) -> Vec<String> {
        session
            .history()
            .entries()
            .map(|e| e.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_empty_line_is_not_recorded() {
        let mut session = session();
        let outcome = exec(&mut session, "   ");

        assert_eq!(outcome.status, Status::Continue);
        assert_eq!(outcome.out, "Please enter something :)\n");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_history_round_trip() {
        let mut session = session();
        exec(&mut session, "echo  hello   world");
        exec(&mut session, "help");

        let outcome = exec(&mut session, "hs");
        assert_eq!(outcome.out, "echo hello world\nhelp\n");

        exec(&mut session, "clrhs");
        let outcome = exec(&mut session, "hs");
        assert_eq!(outcome.out, "");

        assert_eq!(history_lines(&session), vec!["hs"]);
    }

    #[test]
    fn test_failed_builtin_is_reported_and_recorded() {
        let mut session = session();
        let outcome = exec(&mut session, "cp only-one");

        assert_eq!(outcome.status, Status::Continue);
        assert_eq!(outcome.err, "cp: wrong number of arguments\n");
        assert!(outcome.out.is_empty());
        assert_eq!(history_lines(&session), vec!["cp only-one"]);
    }

    #[test]
    fn test_failed_clrhs_is_recorded() {
        let mut session = session();
        exec(&mut session, "help");

        let outcome = exec(&mut session, "clrhs all");

        assert_eq!(outcome.err, "clrhs: too many arguments\n");
        assert_eq!(history_lines(&session), vec!["help", "clrhs all"]);

        exec(&mut session, "clrhs");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_builtins_shadow_path_programs() {
        let mut session = session();
        // /bin/echo exists, but the builtin's trailing space proves which ran.
        let outcome = exec(&mut session, "echo shadowed");
        assert_eq!(outcome.out, "shadowed \n");
    }

    #[test]
    fn test_exit() {
        let mut session = session();

        let outcome = exec(&mut session, "exit now");
        assert_eq!(outcome.status, Status::Continue);
        assert_eq!(outcome.err, "exit: too many arguments\n");

        let outcome = exec(&mut session, "exit");
        assert_eq!(outcome.status, Status::Exit);
    }

    #[test]
    fn test_unknown_command() {
        let mut session = session();
        let outcome = exec(&mut session, "leanshell-no-such-program --flag");

        assert_eq!(outcome.status, Status::Continue);
        assert_eq!(
            outcome.out,
            "Command not found: leanshell-no-such-program\n"
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_external_commands_are_recorded() {
        let mut session = session();
        assert_eq!(exec(&mut session, "true").status, Status::Continue);
        assert_eq!(exec(&mut session, "false").status, Status::Continue);
        let outcome = exec_tokens(&mut session, &["sh", "-c", "exit 255"]);
        assert_eq!(outcome.status, Status::Continue);
        assert!(!outcome.out.contains("Command not found"));

        assert_eq!(
            history_lines(&session),
            vec!["true", "false", "sh -c exit 255"]
        );
    }

    #[test]
    fn test_killed_child_counts_as_launch_failure() {
        let mut session = session();
        let outcome = exec_tokens(&mut session, &["sh", "-c", "kill -9 $$"]);

        assert_eq!(outcome.status, Status::Continue);
        assert_eq!(outcome.out, "Command not found: sh\n");
        assert!(session.history().is_empty());
    }

    #[test]
    #[serial]
    fn test_cd_with_two_arguments_stays_put() {
        let _guard = CwdGuard::new();
        let before = env::current_dir().unwrap();
        let mut session = session();

        let outcome = exec(&mut session, "cd / /tmp");

        assert_eq!(outcome.err, "cd: too many arguments\n");
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_file_commands_through_dispatch() {
        let _guard = CwdGuard::new();
        let dir = tempfile::tempdir().unwrap();
        let mut session = session();

        exec(&mut session, &format!("cd {}", dir.path().display()));
        exec(&mut session, "touch a.txt");
        fs::write("a.txt", "line one\nline two\n").unwrap();
        exec(&mut session, "cp a.txt b.txt");
        exec(&mut session, "mv b.txt c.txt");
        let cat = exec(&mut session, "cat c.txt");
        let ls = exec(&mut session, "ls");

        assert_eq!(cat.out, "line one\nline two\n");
        assert!(ls.out.contains("a.txt"));
        assert!(ls.out.contains("c.txt"));
        assert!(!ls.out.contains("b.txt"));
        assert!(cat.err.is_empty() && ls.err.is_empty());
    }

    #[test]
    #[serial]
    fn test_non_utf8_names_through_dispatch() {
        let _guard = CwdGuard::new();
        let dir = tempfile::tempdir().unwrap();
        env::set_current_dir(dir.path()).unwrap();
        let mut session = session();

        let mut out = Vec::new();
        let mut err = Vec::new();
        session
            .execute(&tokenize(b"touch caf\xe9"), &mut out, &mut err)
            .unwrap();

        assert!(err.is_empty());
        assert!(dir.path().join(OsStr::from_bytes(b"caf\xe9")).exists());

        out.clear();
        session
            .execute(&tokenize(b"hs"), &mut out, &mut err)
            .unwrap();
        assert_eq!(out, b"touch caf\xe9\n".to_vec());
    }

    #[test]
    fn test_unknown_non_utf8_command_is_echoed_raw() {
        let mut session = session();
        let mut out = Vec::new();
        let mut err = Vec::new();

        session
            .execute(&tokenize(b"leanshell-\xff"), &mut out, &mut err)
            .unwrap();

        assert_eq!(out, b"Command not found: leanshell-\xff\n".to_vec());
    }
}
