//! Stopwatch timer wrapping a logger
//!
//! A timer captures a monotonic start instant and recomputes the elapsed
//! duration on every emit, so consecutive calls report cumulative time. All
//! filtering and routing go through the owning logger; the timer never
//! writes directly.

use super::duration::{format_duration, DurationStyle};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::record::DurationContext;
use super::value::LogValue;
use std::time::Instant;

pub struct Timer<'a> {
    logger: &'a Logger,
    start: Instant,
    style: DurationStyle,
}

impl<'a> Timer<'a> {
    pub(crate) fn new(logger: &'a Logger, style: DurationStyle) -> Self {
        Self {
            logger,
            start: Instant::now(),
            style,
        }
    }

    /// Elapsed milliseconds since the timer was created, rounded.
    pub fn elapsed_ms(&self) -> u64 {
        (self.start.elapsed().as_secs_f64() * 1000.0).round() as u64
    }

    pub fn log(&self, level: LogLevel, message: impl Into<LogValue>) {
        self.log_with(level, message.into(), Vec::new());
    }

    /// Leveled call with extra arguments, tagged with the elapsed duration.
    pub fn log_with(&self, level: LogLevel, message: LogValue, args: Vec<LogValue>) {
        let millis = self.elapsed_ms();
        let ctx = DurationContext {
            formatted: format_duration(millis, self.style),
            millis,
        };
        self.logger.dispatch(level, &message, &args, Some(&ctx));
    }

    #[inline]
    pub fn debug(&self, message: impl Into<LogValue>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<LogValue>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<LogValue>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<LogValue>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<LogValue>) {
        self.log(LogLevel::Fatal, message);
    }
}
