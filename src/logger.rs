use env_logger::{Builder, Env};

/// Logs go to stderr so that command output on stdout stays parseable.
pub struct Logger;

impl Logger {
    /// Map the number of `-v` flags to a log filter. `RUST_LOG` takes
    /// precedence.
    pub fn init(verbosity: u8) {
        let log_filter = match verbosity {
            0 => "binmark=info,warn",
            1 => "binmark=debug,info",
            _ => "binmark=trace,reqwest=debug,info",
        };

        Builder::from_env(Env::default().default_filter_or(log_filter))
            .format_timestamp(None)
            .format_module_path(verbosity > 1)
            .format_target(false)
            .init();
    }
}
