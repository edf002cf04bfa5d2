// src/log.rs
// Thin logging macros over the `log` facade. The binary decides where lines go
// (env_logger on stderr); the library only emits records.

pub const TARGET: &str = "csp_lookup";

/// Install the stderr logger. `RUST_LOG` overrides the default filter.
#[cfg(feature = "cli")]
pub fn init(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
