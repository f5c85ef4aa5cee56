//! Color capability resolution and module tag coloring
//!
//! Capabilities are resolved once at construction from an injected
//! environment reader plus the stream's tty status; formatting logic never
//! consults the ambient environment.

use colored::Color;
use std::collections::HashMap;

/// Read-only view of the process environment, injected so tests can pin the
/// color configuration.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed key-value environment for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Resolved terminal color capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCaps {
    pub enabled: bool,
    pub truecolor: bool,
}

impl ColorCaps {
    /// Resolve capabilities: `NO_COLOR` forces monochrome, `FORCE_COLOR`
    /// forces color even without a tty, otherwise the tty status decides.
    /// `COLORTERM` signaling truecolor upgrades module tag coloring.
    pub fn resolve(env: &dyn EnvSource, stream_is_tty: bool) -> Self {
        let enabled = if env.var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            false
        } else if env.var("FORCE_COLOR").is_some_and(|v| v != "0") {
            true
        } else {
            stream_is_tty
        };

        let truecolor = env.var("COLORTERM").is_some_and(|v| {
            let v = v.to_lowercase();
            v.contains("truecolor") || v.contains("24bit")
        });

        Self {
            enabled,
            truecolor: enabled && truecolor,
        }
    }

    pub fn monochrome() -> Self {
        Self {
            enabled: false,
            truecolor: false,
        }
    }
}

/// Apply a color when enabled, otherwise return the text untouched.
///
/// Escapes are emitted directly from the resolved capabilities so that each
/// logger's color setting is independent of any process-global state.
pub fn paint(text: &str, color: Color, caps: ColorCaps) -> String {
    if caps.enabled {
        format!("\x1b[{}m{}\x1b[0m", fg_code(color), text)
    } else {
        text.to_string()
    }
}

fn fg_code(color: Color) -> String {
    let code = match color {
        Color::Black => "30",
        Color::Red => "31",
        Color::Green => "32",
        Color::Yellow => "33",
        Color::Blue => "34",
        Color::Magenta => "35",
        Color::Cyan => "36",
        Color::White => "37",
        Color::BrightBlack => "90",
        Color::BrightRed => "91",
        Color::BrightGreen => "92",
        Color::BrightYellow => "93",
        Color::BrightBlue => "94",
        Color::BrightMagenta => "95",
        Color::BrightCyan => "96",
        Color::BrightWhite => "97",
        Color::TrueColor { r, g, b } => return format!("38;2;{};{};{}", r, g, b),
    };
    code.to_string()
}

/// Deterministic truecolor hue for a module name.
pub fn hashed_module_color(module: &str) -> Color {
    let mut hash: u32 = 0;
    for byte in module.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u32);
    }
    let (r, g, b) = hsl_to_rgb(f64::from(hash % 360), 0.8, 0.6);
    Color::TrueColor { r, g, b }
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}
