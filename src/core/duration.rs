//! Elapsed-duration formatting for timer tags
//!
//! A pure function of milliseconds and style. The narrow style is the
//! default used by `Logger::timer`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationStyle {
    /// Compact: `250ms`, `1.25s`, `2m 5s`
    #[default]
    Narrow,
    /// Compact with spaces: `250 ms`, `1.25 s`
    Short,
    /// Spelled out: `250 milliseconds`, `1 second`
    Long,
}

impl fmt::Display for DurationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DurationStyle::Narrow => "narrow",
            DurationStyle::Short => "short",
            DurationStyle::Long => "long",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy)]
enum Unit {
    Millis,
    Secs,
    Mins,
    Hours,
}

/// Format an elapsed duration in milliseconds according to the style.
pub fn format_duration(ms: u64, style: DurationStyle) -> String {
    if ms < 1_000 {
        return part(ms.to_string(), Unit::Millis, ms != 1, style);
    }
    if ms < 60_000 {
        let secs = trim_fraction(ms as f64 / 1000.0);
        let plural = secs != "1";
        return part(secs, Unit::Secs, plural, style);
    }
    if ms < 3_600_000 {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1_000;
        return join_parts(mins, Unit::Mins, secs, Unit::Secs, style);
    }
    let hours = ms / 3_600_000;
    let mins = (ms % 3_600_000) / 60_000;
    join_parts(hours, Unit::Hours, mins, Unit::Mins, style)
}

fn join_parts(big: u64, big_unit: Unit, small: u64, small_unit: Unit, style: DurationStyle) -> String {
    let first = part(big.to_string(), big_unit, big != 1, style);
    if small == 0 {
        return first;
    }
    let second = part(small.to_string(), small_unit, small != 1, style);
    format!("{} {}", first, second)
}

fn part(amount: String, unit: Unit, plural: bool, style: DurationStyle) -> String {
    match style {
        DurationStyle::Narrow => format!("{}{}", amount, narrow_label(unit)),
        DurationStyle::Short => format!("{} {}", amount, narrow_label(unit)),
        DurationStyle::Long => {
            let label = long_label(unit);
            if plural {
                format!("{} {}s", amount, label)
            } else {
                format!("{} {}", amount, label)
            }
        }
    }
}

fn narrow_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Millis => "ms",
        Unit::Secs => "s",
        Unit::Mins => "m",
        Unit::Hours => "h",
    }
}

fn long_label(unit: Unit) -> &'static str {
    match unit {
        Unit::Millis => "millisecond",
        Unit::Secs => "second",
        Unit::Mins => "minute",
        Unit::Hours => "hour",
    }
}

/// Render a fractional amount with up to two decimals, trailing zeros trimmed.
fn trim_fraction(amount: f64) -> String {
    let rendered = format!("{:.2}", amount);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
