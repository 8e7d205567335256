//! Macros for generating log messages.
//!
//! Each level macro forwards to `log_event!`, which ensures the subscriber exists and tags the event with its
//! verbosity threshold. The `critical!` level is an `ERROR` event carrying an extra `critical` field.

#[doc(hidden)]
#[macro_export]
macro_rules! log_event {
    ($level:expr, critical, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            tracing::event!(
                $level,
                critical = true,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
    ($level:expr, plain, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            tracing::event!(
                $level,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($threshold:expr, $($arg:tt)+) => {
        $crate::log_event!(tracing::Level::ERROR, critical, $threshold, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_event!(tracing::Level::ERROR, critical, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($threshold:expr, $($arg:tt)+) => {
        $crate::log_event!(tracing::Level::ERROR, plain, $threshold, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_event!(tracing::Level::ERROR, plain, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($threshold:expr, $($arg:tt)+) => {
        $crate::log_event!(tracing::Level::WARN, plain, $threshold, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_event!(tracing::Level::WARN, plain, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($threshold:expr, $($arg:tt)+) => {
        $crate::log_event!(tracing::Level::INFO, plain, $threshold, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_event!(tracing::Level::INFO, plain, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($threshold:expr, $($arg:tt)+) => {
        $crate::log_event!(tracing::Level::DEBUG, plain, $threshold, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_event!(tracing::Level::DEBUG, plain, 0, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($threshold:expr, $($arg:tt)+) => {
        $crate::log_event!(tracing::Level::TRACE, plain, $threshold, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_event!(tracing::Level::TRACE, plain, 0, $($arg)+)
    };
}


// The following makes the macros importable directly from the `log` module.
pub use {critical, error, warning, info, debug, trace};
