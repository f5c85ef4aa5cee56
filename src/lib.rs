//! # Linelog
//!
//! A small structured logging facade: leveled calls with arbitrary values
//! become human-readable colored text lines or newline-delimited JSON
//! records, routed by severity to the right output stream.
//!
//! ## Features
//!
//! - **Two formats**: colored text or JSONL, chosen at construction
//! - **Cycle safe**: cyclic values and cause chains never loop or fail
//! - **Error enrichment**: cause chains and stack traces on error/fatal
//! - **Timers**: stopwatch tags with cumulative elapsed durations

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        discard, format_duration, ColorCaps, DurationContext, DurationStyle, EnvSource,
        ErrorRecord, ErrorValue, LogLevel, LogValue, Logger, LoggerBuilder, LoggerError, MapEnv,
        MemorySink, OutputFormat, ProcessEnv, Result, TerminateCallback, Timer,
    };
}

pub use crate::core::{
    build_record, cause_chain, discard, display_message, encode_value, format_duration, render,
    serialize_error, stringify, ColorCaps, DurationContext, DurationStyle, Discard, EnvSource,
    ErrorRecord, ErrorValue, LogLevel, LogValue, Logger, LoggerBuilder, LoggerError, MapEnv,
    MemorySink, OutputFormat, ProcessEnv, Result, SharedError, TerminateCallback, Timer,
    CIRCULAR_MARKER,
};
