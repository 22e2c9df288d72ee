use env_logger::{Builder, Env};

/// Default log filter for a given `-v` count.
#[must_use]
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global logger. `RUST_LOG` wins over the `-v` count.
pub fn init(verbosity: u8) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
