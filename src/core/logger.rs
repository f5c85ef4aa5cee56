//! Main logger implementation

use super::{
    color::{hashed_module_color, ColorCaps, EnvSource, ProcessEnv},
    duration::DurationStyle,
    emitter::Emitter,
    error::Result,
    inspect,
    log_level::LogLevel,
    output_format::OutputFormat,
    record::{build_record, stringify, DurationContext, TIMESTAMP_FORMAT},
    render::render,
    stack,
    timer::Timer,
    value::{LogValue, SharedError},
};
use chrono::Utc;
use colored::Color;
use parking_lot::RwLock;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// Callback invoked after a fatal entry has been fully emitted.
pub type TerminateCallback = Box<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone)]
struct ModuleState {
    label: String,
    color: Option<Color>,
}

pub struct Logger {
    min_level: RwLock<LogLevel>,
    module: RwLock<ModuleState>,
    format: OutputFormat,
    emitter: Emitter,
    caps: ColorCaps,
    terminate: TerminateCallback,
}

// Streams and the terminate callback are opaque, so no derive.
impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level())
            .field("module", &self.module.read().label)
            .field("format", &self.format)
            .field("caps", &self.caps)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Change the minimum level from a name, validated against the level set.
    pub fn set_min_level_name(&self, name: &str) -> Result<()> {
        let level = name.parse::<LogLevel>()?;
        self.set_min_level(level);
        Ok(())
    }

    pub fn module(&self) -> String {
        self.module.read().label.clone()
    }

    /// Change the module label; the derived module color is recomputed.
    pub fn set_module(&self, label: &str) {
        let mut module = self.module.write();
        module.label = label.to_string();
        module.color = derive_module_color(label, self.caps);
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<LogValue>) {
        self.log_with(level, message.into(), Vec::new());
    }

    /// Generic leveled call accepting a primary value and extra arguments.
    pub fn log_with(&self, level: LogLevel, message: LogValue, args: Vec<LogValue>) {
        self.dispatch(level, &message, &args, None);
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

    /// Log at fatal level. The terminate callback runs after emission; with
    /// the default callback this ends the process.
    #[inline]
    pub fn fatal(&self, message: impl Into<LogValue>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Start a stopwatch timer with the default narrow duration style.
    pub fn timer(&self) -> Timer<'_> {
        Timer::new(self, DurationStyle::default())
    }

    /// Start a stopwatch timer with an explicit duration style.
    pub fn timer_with_style(&self, style: DurationStyle) -> Timer<'_> {
        Timer::new(self, style)
    }

    pub(crate) fn dispatch(
        &self,
        level: LogLevel,
        message: &LogValue,
        args: &[LogValue],
        duration: Option<&DurationContext>,
    ) {
        if !self.enabled(level) {
            return;
        }
        match self.format {
            OutputFormat::Jsonl => self.emit_jsonl(level, message, args, duration),
            OutputFormat::Text => self.emit_text(level, message, args, duration),
        }
        // Termination is the last action of a fatal call, in both modes.
        if level == LogLevel::Fatal {
            (self.terminate)();
        }
    }

    fn emit_jsonl(
        &self,
        level: LogLevel,
        message: &LogValue,
        args: &[LogValue],
        duration: Option<&DurationContext>,
    ) {
        let module = self.module.read().label.clone();
        let record = build_record(level, message, args, Some(module.as_str()), duration);
        self.emitter.write_line(level, &stringify(&record));
    }

    fn emit_text(
        &self,
        level: LogLevel,
        message: &LogValue,
        args: &[LogValue],
        duration: Option<&DurationContext>,
    ) {
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let module = self.module.read().clone();
        let prefix = self
            .emitter
            .build_prefix(level, &timestamp, &module.label, module.color);

        let mut body = String::new();
        if let Some(ctx) = duration {
            body.push_str(&super::color::paint(
                &format!("[{}]", ctx.formatted),
                Color::Cyan,
                self.caps,
            ));
            body.push(' ');
        }
        body.push_str(&render(message));
        for arg in args {
            body.push(' ');
            body.push_str(&render(arg));
        }
        self.emitter.write_line(level, &format!("{}{}", prefix, body));

        if level.is_severe() {
            self.emit_error_details(level, &prefix, message, args);
        }
    }

    /// Cause lines, logged-error stack frames, then the call site's own
    /// stack, each as a separately prefixed line.
    fn emit_error_details(
        &self,
        level: LogLevel,
        prefix: &str,
        message: &LogValue,
        args: &[LogValue],
    ) {
        let errorish: Vec<&SharedError> = std::iter::once(message)
            .chain(args.iter())
            .filter_map(LogValue::as_error)
            .collect();

        for cell in &errorish {
            for cause in inspect::cause_chain(cell) {
                let line = format!(
                    "{}Caused by: {}",
                    prefix,
                    inspect::display_message(&cause.read())
                );
                self.emitter.write_line(level, &line);
            }
        }

        for cell in &errorish {
            for frame in cell.read().stack.iter().filter(|f| !f.is_empty()) {
                self.emitter.write_line(level, &format!("{}{}", prefix, frame));
            }
        }

        self.emitter
            .write_line(level, &format!("{}Stack trace:", prefix));
        for frame in stack::capture_native_stack() {
            self.emitter.write_line(level, &format!("{}{}", prefix, frame));
        }
    }
}

fn derive_module_color(label: &str, caps: ColorCaps) -> Option<Color> {
    if caps.truecolor && !label.is_empty() {
        Some(hashed_module_color(label))
    } else {
        None
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use linelog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .module("api")
///     .format(OutputFormat::Jsonl)
///     .build()
///     .unwrap();
/// logger.info("server started");
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    min_level_name: Option<String>,
    module: String,
    format: OutputFormat,
    format_name: Option<String>,
    split_jsonl: bool,
    primary: Option<Box<dyn Write + Send>>,
    secondary: Option<Box<dyn Write + Send>>,
    env: Box<dyn EnvSource>,
    assume_tty: Option<bool>,
    terminate: Option<TerminateCallback>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            min_level_name: None,
            module: String::new(),
            format: OutputFormat::Text,
            format_name: None,
            split_jsonl: false,
            primary: None,
            secondary: None,
            env: Box::new(ProcessEnv),
            assume_tty: None,
            terminate: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the minimum level from a name; validated in `build()`
    #[must_use = "builder methods return a new value"]
    pub fn min_level_name(mut self, name: impl Into<String>) -> Self {
        self.min_level_name = Some(name.into());
        self
    }

    /// Set the module label shown in the `[module]` tag
    #[must_use = "builder methods return a new value"]
    pub fn module(mut self, label: impl Into<String>) -> Self {
        self.module = label.into();
        self
    }

    /// Set the output format
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output format from a name; validated in `build()`
    #[must_use = "builder methods return a new value"]
    pub fn format_name(mut self, name: impl Into<String>) -> Self {
        self.format_name = Some(name.into());
        self
    }

    /// In JSONL mode, route warn and above to the secondary stream instead
    /// of the unified primary stream
    #[must_use = "builder methods return a new value"]
    pub fn split_jsonl(mut self, split: bool) -> Self {
        self.split_jsonl = split;
        self
    }

    /// Replace the primary output stream (default: stdout)
    #[must_use = "builder methods return a new value"]
    pub fn primary_stream(mut self, stream: Box<dyn Write + Send>) -> Self {
        self.primary = Some(stream);
        self
    }

    /// Replace the secondary output stream (default: stderr)
    #[must_use = "builder methods return a new value"]
    pub fn secondary_stream(mut self, stream: Box<dyn Write + Send>) -> Self {
        self.secondary = Some(stream);
        self
    }

    /// Replace the environment reader used for color capability resolution
    #[must_use = "builder methods return a new value"]
    pub fn env_source(mut self, env: Box<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    /// Override tty detection for color capability resolution
    #[must_use = "builder methods return a new value"]
    pub fn assume_tty(mut self, is_tty: bool) -> Self {
        self.assume_tty = Some(is_tty);
        self
    }

    /// Replace the termination side effect of fatal entries
    /// (default: `std::process::exit(1)`)
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, callback: TerminateCallback) -> Self {
        self.terminate = Some(callback);
        self
    }

    /// Build the Logger. Fails on an invalid level or format name without
    /// constructing anything.
    pub fn build(self) -> Result<Logger> {
        let min_level = match &self.min_level_name {
            Some(name) => name.parse::<LogLevel>()?,
            None => self.min_level,
        };
        let format = match &self.format_name {
            Some(name) => name.parse::<OutputFormat>()?,
            None => self.format,
        };

        let is_tty = self
            .assume_tty
            .unwrap_or_else(|| self.primary.is_none() && io::stdout().is_terminal());
        let caps = ColorCaps::resolve(self.env.as_ref(), is_tty);

        let primary = self.primary.unwrap_or_else(|| Box::new(io::stdout()));
        let secondary = self.secondary.unwrap_or_else(|| Box::new(io::stderr()));

        let module = ModuleState {
            color: derive_module_color(&self.module, caps),
            label: self.module,
        };

        Ok(Logger {
            min_level: RwLock::new(min_level),
            module: RwLock::new(module),
            format,
            emitter: Emitter::new(primary, secondary, format, self.split_jsonl, caps),
            caps,
            terminate: self
                .terminate
                .unwrap_or_else(|| Box::new(|| std::process::exit(1))),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
