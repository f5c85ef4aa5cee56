//! Output sinks
//!
//! Streams are plain `Write + Send` boxes; this module adds an in-memory
//! sink for tests and a discard sink for contexts where output is unwanted.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Shared in-memory sink. Cloning shares the buffer, so a clone can be
/// handed to the logger while the original reads back what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that swallows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Write for Discard {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Boxed discard sink, the default in test contexts.
pub fn discard() -> Box<dyn Write + Send> {
    Box::new(Discard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_writes() {
        let sink = MemorySink::new();
        let mut handle = sink.clone();
        writeln!(handle, "first").unwrap();
        writeln!(handle, "second").unwrap();

        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.clone().write_all(b"data").unwrap();
        assert!(!sink.is_empty());
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_discard_accepts_everything() {
        let mut sink = Discard;
        assert_eq!(sink.write(b"gone").unwrap(), 4);
        sink.flush().unwrap();
    }
}
