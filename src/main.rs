use std::io::{self, IsTerminal};

use env_logger::Env;
use leanshell::flags::Flags;
use leanshell::shell::{Shell, ShellConfig};
use log::{debug, LevelFilter};

fn init_logging(debug: bool) {
    let default_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}

fn main() -> Result<(), leanshell::error::ShellError> {
    let flags: Flags = argh::from_env();

    if flags.version {
        println!("leanshell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(flags.debug);

    let config = ShellConfig::from_flags(&flags, io::stdout().is_terminal());
    debug!("starting with {:?}", config);

    let mut shell = Shell::new(config);
    shell.run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
}
