use std::env;

/// Development aids toggled from the command line, parsed once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LaunchOptions {
    pub(crate) debug: bool,
}

impl LaunchOptions {
    pub(crate) fn from_process_args() -> Self {
        Self::from_args(env::args())
    }

    /// `--debug` is only recognized as the second process argument, the same
    /// positional pattern the launcher scripts pass it in.
    fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let debug = args
            .nth(1)
            .map(|argument| argument.contains("--debug"))
            .unwrap_or(false);
        Self { debug }
    }
}
