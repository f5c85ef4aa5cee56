//! Line emission and stream routing
//!
//! Text mode splits output by severity: debug and info go to the primary
//! stream, warn and above to the secondary stream. JSONL mode unifies all
//! levels on the primary stream unless split routing is enabled. Every call
//! writes exactly one line.

use super::color::{paint, ColorCaps};
use super::log_level::LogLevel;
use super::output_format::OutputFormat;
use colored::Color;
use parking_lot::Mutex;
use std::io::Write;

/// Which stream receives a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Primary,
    Secondary,
}

pub struct Emitter {
    primary: Mutex<Box<dyn Write + Send>>,
    secondary: Mutex<Box<dyn Write + Send>>,
    format: OutputFormat,
    split_jsonl: bool,
    caps: ColorCaps,
}

impl Emitter {
    pub fn new(
        primary: Box<dyn Write + Send>,
        secondary: Box<dyn Write + Send>,
        format: OutputFormat,
        split_jsonl: bool,
        caps: ColorCaps,
    ) -> Self {
        Self {
            primary: Mutex::new(primary),
            secondary: Mutex::new(secondary),
            format,
            split_jsonl,
            caps,
        }
    }

    /// Pick the stream for a level under the configured format and split flag.
    pub fn route(&self, level: LogLevel) -> Target {
        if self.format == OutputFormat::Jsonl && !self.split_jsonl {
            return Target::Primary;
        }
        if level >= LogLevel::Warn {
            Target::Secondary
        } else {
            Target::Primary
        }
    }

    /// Write one line plus a trailing newline to the routed stream.
    pub fn write_line(&self, level: LogLevel, line: &str) {
        let result = match self.route(level) {
            Target::Primary => writeln!(self.primary.lock(), "{}", line),
            Target::Secondary => writeln!(self.secondary.lock(), "{}", line),
        };
        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] stream write failed: {}", e);
        }
    }

    /// Fixed-width text prefix: colorized timestamp, level tag padded to
    /// seven columns, and the optional module tag.
    pub fn build_prefix(
        &self,
        level: LogLevel,
        timestamp: &str,
        module: &str,
        module_color: Option<Color>,
    ) -> String {
        let ts = paint(timestamp, Color::BrightBlack, self.caps);
        let tag = format!("{:<7}", format!("[{}]", level.tag()));
        let tag = paint(&tag, level.color_code(), self.caps);

        let mut prefix = format!("{}  {}  ", ts, tag);
        if !module.is_empty() {
            let color = module_color.unwrap_or_else(|| level.color_code());
            prefix.push_str(&paint(&format!("[{}]", module), color, self.caps));
            prefix.push(' ');
        }
        prefix
    }
}
