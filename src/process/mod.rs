use thiserror::Error;

pub mod executor;

pub use executor::ProcessLauncher;

/// Reasons an external program did not produce an exit code.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("empty command")]
    EmptyCommand,
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} terminated by signal {signal}")]
    Signaled { program: String, signal: i32 },
    #[error("{program} terminated without an exit code")]
    Terminated { program: String },
}
