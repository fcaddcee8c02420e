use argh::FromArgs;

/// A small interactive shell with a handful of builtins.
#[derive(FromArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// do not print the prompt before each line
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    /// enable debug logging on stderr
    #[argh(switch, short = 'd')]
    pub debug: bool,

    /// never style output with terminal colours
    #[argh(switch)]
    pub no_color: bool,

    /// print version information and exit
    #[argh(switch, short = 'v')]
    pub version: bool,
}

impl Flags {
    pub fn parse(args: &[&str]) -> Result<Self, argh::EarlyExit> {
        Flags::from_args(&["leanshell"], args)
    }
}
