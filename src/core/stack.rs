//! Call-site stack capture for severe log entries

use std::backtrace::Backtrace;

/// Capture the current call stack as one string per frame, with the capture
/// frame itself removed. Frames keep their source location when the runtime
/// renders one.
pub fn capture_native_stack() -> Vec<String> {
    frames_from(&Backtrace::force_capture().to_string())
}

/// Split a rendered backtrace into per-frame strings. A frame starts at a
/// `N: symbol` line; a following `at path:line` line is folded into it.
fn frames_from(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(symbol) = frame_symbol(trimmed) {
            frames.push(symbol.to_string());
        } else if let Some(stripped) = trimmed.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                last.push_str(" (");
                last.push_str(stripped.trim());
                last.push(')');
            }
        }
    }
    if frames.is_empty() {
        frames
    } else {
        frames.split_off(1)
    }
}

fn frame_symbol(line: &str) -> Option<&str> {
    let (index, rest) = line.split_once(':')?;
    if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
        Some(rest.trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENDERED: &str = "\
   0: linelog::core::stack::capture_native_stack
             at ./src/core/stack.rs:9:17
   1: linelog::core::logger::Logger::dispatch
             at ./src/core/logger.rs:120:5
   2: my_app::main
             at ./src/main.rs:14:5
";

    #[test]
    fn test_first_frame_removed() {
        let frames = frames_from(RENDERED);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].starts_with("linelog::core::logger::Logger::dispatch"));
        assert!(frames[1].starts_with("my_app::main"));
    }

    #[test]
    fn test_location_folded_into_frame() {
        let frames = frames_from(RENDERED);
        assert_eq!(
            frames[1],
            "my_app::main (./src/main.rs:14:5)"
        );
    }

    #[test]
    fn test_empty_or_unsupported_backtrace() {
        assert!(frames_from("disabled backtrace").is_empty());
        assert!(frames_from("").is_empty());
    }

    #[test]
    fn test_live_capture_does_not_panic() {
        // Frame content is platform-dependent; only the call must be safe.
        let _ = capture_native_stack();
    }
}
