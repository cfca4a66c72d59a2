//! Utilities shared by unit tests.

/// Check an expression evaluates to the expected error.
/// https://stackoverflow.com/a/65618681
macro_rules! assert_err {
    ($expression:expr, $($pattern:tt)+) => {
        match $expression {
            $($pattern)+ => (),
            ref e => panic!("expected `{}` but got `{:?}`", stringify!($($pattern)+), e),
        }
    }
}
pub(crate) use assert_err;

/// Same as [assert_err] but without needing debug.
/// https://stackoverflow.com/a/65618681
macro_rules! assert_err_simple {
        ($expression:expr, $($pattern:tt)+) => {
            match $expression {
                $($pattern)+ => (),
                _ => panic!("expected a specific error but did not get it"),
            }
        }
    }
pub(crate) use assert_err_simple;

pub(crate) fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .is_test(true)
        .try_init();
}

/// Vertical blinker centered on the origin column.
pub(crate) fn blinker_cells() -> [(i64, i64); 3] {
    [(0, -1), (0, 0), (0, 1)]
}

/// Glider that translates by (1, 1) every four generations.
pub(crate) fn glider_cells() -> [(i64, i64); 5] {
    [(0, -1), (1, 0), (-1, 1), (0, 1), (1, 1)]
}
