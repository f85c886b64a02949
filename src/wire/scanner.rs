//! Incremental frame boundary scanner
//!
//! Accumulates raw transport reads and yields the payload of each complete
//! `data: ...` frame as soon as its `\n\n` delimiter arrives. Independent of
//! any transport library; the same scanner parses both our own wire format
//! and upstream provider event streams.

const DELIMITER: &[u8] = b"\n\n";
const DATA_PREFIX: &str = "data:";

/// Growing buffer + delimiter-search loop over raw byte chunks.
#[derive(Debug, Default)]
pub struct FrameScanner {
    buffer: Vec<u8>,
}

impl FrameScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw read; returns the payloads of every frame completed by
    /// it, in order. Segments that are not valid UTF-8 or do not carry the
    /// `data:` prefix are dropped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut payloads = Vec::new();
        while let Some(boundary) = find_delimiter(&self.buffer) {
            let segment: Vec<u8> = self.buffer.drain(..boundary + DELIMITER.len()).collect();
            let Ok(text) = std::str::from_utf8(&segment) else {
                continue;
            };
            if let Some(payload) = text.trim().strip_prefix(DATA_PREFIX) {
                let payload = payload.trim();
                if !payload.is_empty() {
                    payloads.push(payload.to_string());
                }
            }
        }
        payloads
    }

    /// Bytes held back waiting for a delimiter.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

fn find_delimiter(buffer: &[u8]) -> Option<usize> {
    buffer.windows(DELIMITER.len()).position(|w| w == DELIMITER)
}
