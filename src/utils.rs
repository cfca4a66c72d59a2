//! Mixed-bag of supporting functionality.

use log::{error, LevelFilter};

/// Initialize the global logger.
///
/// The level is meant to come from the CLI's verbosity flag, e.g.
/// `cli.verbose.log_level_filter()`.
pub fn activate_logging(log_level: LevelFilter) {
    env_logger::Builder::new().filter_level(log_level).init();
}

/// Unwrap the result, logging the error before panicking so that it shows up
/// in the log stream and not only on stderr.
pub trait LogOnErrUnwrap<T, E> {
    fn log_on_err_unwrap(self) -> T;
}

impl<T, E: std::fmt::Display> LogOnErrUnwrap<T, E> for Result<T, E> {
    fn log_on_err_unwrap(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                error!("{}", err);
                panic!("{}", err);
            }
        }
    }
}
