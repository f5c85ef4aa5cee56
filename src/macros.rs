//! Logging macros for variadic leveled calls.
//!
//! Each macro accepts a primary value plus any number of extra arguments;
//! every argument is converted through `LogValue::from`. The macros work on
//! both `Logger` and `Timer` receivers since both expose `log_with`.
//!
//! # Examples
//!
//! ```
//! use linelog::prelude::*;
//! use linelog::info;
//!
//! let logger = Logger::builder()
//!     .primary_stream(linelog::discard())
//!     .secondary_stream(linelog::discard())
//!     .build()
//!     .unwrap();
//!
//! info!(logger, "server started");
//! info!(logger, "listening", 8080, "ipv4");
//! ```

/// Log at an explicit level with a primary value and extra arguments.
///
/// ```
/// # use linelog::prelude::*;
/// # let logger = Logger::builder()
/// #     .primary_stream(linelog::discard())
/// #     .secondary_stream(linelog::discard())
/// #     .build().unwrap();
/// use linelog::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Warn, "retrying", 3, 5);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_with(
            $level,
            $crate::LogValue::from($message),
            vec![$($crate::LogValue::from($arg)),*],
        )
    };
}

/// Log a debug-level entry.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

/// Log an info-level entry.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

/// Log a warn-level entry.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($rest)+)
    };
}

/// Log an error-level entry.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

/// Log a fatal-level entry. With the default terminate callback this ends
/// the process after emission.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($rest)+)
    };
}
