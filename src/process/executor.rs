use std::ffi::OsString;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use log::debug;

use super::LaunchError;

/// Runs external programs found through `PATH` and waits for them.
#[derive(Clone, Debug, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `argv[0]` with the remaining arguments and blocks until it exits.
    ///
    /// The arguments are passed exactly as tokenized, byte for byte. A child
    /// killed by a signal has no exit code and is reported as a launch failure.
    pub fn launch(&self, argv: &[OsString]) -> Result<i32, LaunchError> {
        let (program, args) = argv.split_first().ok_or(LaunchError::EmptyCommand)?;
        let name = program.to_string_lossy().into_owned();

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: name.clone(),
                source,
            })?;

        debug!("spawned {} (pid {})", name, child.id());

        let status = child.wait().map_err(|source| LaunchError::Wait {
            program: name.clone(),
            source,
        })?;

        match (status.code(), status.signal()) {
            (Some(code), _) => {
                debug!("{} exited with status {}", name, code);
                Ok(code)
            }
            (None, Some(signal)) => Err(LaunchError::Signaled {
                program: name,
                signal,
            }),
            (None, None) => Err(LaunchError::Terminated { program: name }),
        }
    }
}
