//! Shared in-memory writer

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A cloneable `Write` target backed by one shared buffer
///
/// Hand one clone to `Loggr::with_writer` and keep another to read what was
/// written. Useful for tests and for embedding output elsewhere.
#[derive(Debug, Clone, Default)]
pub struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let reader = BufferWriter::new();
        let mut writer = reader.clone();

        writeln!(writer, "first").unwrap();
        writeln!(writer, "second").unwrap();

        assert_eq!(reader.lines(), vec!["first", "second"]);

        reader.clear();
        assert!(writer.is_empty());
    }
}
