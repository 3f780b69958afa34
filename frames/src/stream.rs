//! Incremental decoder for the relay's event-stream body.
//!
//! DESIGN
//! ======
//! The body arrives as arbitrary byte chunks. Bytes are buffered raw and split
//! on `\n`, so a line (or a multi-byte character) cut by a chunk boundary waits
//! in the carry-over buffer until its terminator arrives. Only complete lines
//! are decoded.
//!
//! Each line is one of: ignorable (blank, `:` comment, foreign field), a
//! `data: <json>` payload carrying `choices[0].delta.content`, or the
//! `data: [DONE]` terminator. Once the terminator is seen the decoder is
//! finished and discards everything after it.

use serde::Deserialize;

/// Prefix of every payload-carrying line.
pub const DATA_PREFIX: &str = "data: ";

/// Payload marking the end of the stream.
pub const DONE_TOKEN: &str = "[DONE]";

/// Application-level event produced by [`EventDecoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamEvent {
    /// Non-empty text increment, in arrival order.
    Fragment(String),
    /// Terminator seen. No further events follow.
    Done,
}

/// Result of decoding a single complete line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// Blank, comment, non-`data` field, or a payload without text.
    Ignored,
    /// `data` payload that is not valid JSON of the expected shape.
    Malformed,
    Fragment(String),
    Done,
}

#[derive(Deserialize)]
struct CompletionChunk {
    choices: Option<Vec<ChunkChoice>>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    delta: Option<ChunkDelta>,
}

#[derive(Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

impl CompletionChunk {
    fn into_content(self) -> Option<String> {
        self.choices?.into_iter().next()?.delta?.content
    }
}

/// Decode one complete line (without its `\n`).
#[must_use]
pub fn decode_line(line: &str) -> LineEvent {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() || line.starts_with(':') {
        return LineEvent::Ignored;
    }
    let Some(data) = line.strip_prefix(DATA_PREFIX) else {
        return LineEvent::Ignored;
    };

    let data = data.trim();
    if data == DONE_TOKEN {
        return LineEvent::Done;
    }

    match serde_json::from_str::<CompletionChunk>(data) {
        Ok(chunk) => match chunk.into_content() {
            Some(text) if !text.is_empty() => LineEvent::Fragment(text),
            _ => LineEvent::Ignored,
        },
        Err(_) => LineEvent::Malformed,
    }
}

/// Carry-over buffer turning byte chunks into [`StreamEvent`]s.
#[derive(Debug, Default)]
pub struct EventDecoder {
    buffer: Vec<u8>,
    finished: bool,
}

impl EventDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once the terminator has been decoded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Bytes held back waiting for a line terminator.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Feed the next chunk and return the events completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }
        self.buffer.extend_from_slice(chunk);

        let mut start = 0;
        while let Some(offset) = self.buffer[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset;
            let event = decode_line(&String::from_utf8_lossy(&self.buffer[start..end]));
            start = end + 1;
            if self.apply(event, &mut events) {
                return events;
            }
        }
        self.buffer.drain(..start);
        events
    }

    /// Flush at end of body. A trailing unterminated line can no longer grow,
    /// so it is decoded as complete.
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        if self.finished || self.buffer.is_empty() {
            self.buffer.clear();
            return events;
        }
        let rest = std::mem::take(&mut self.buffer);
        self.apply(decode_line(&String::from_utf8_lossy(&rest)), &mut events);
        events
    }

    /// Returns `true` when the stream has terminated.
    fn apply(&mut self, line: LineEvent, events: &mut Vec<StreamEvent>) -> bool {
        match line {
            LineEvent::Fragment(text) => {
                events.push(StreamEvent::Fragment(text));
                false
            }
            LineEvent::Done => {
                self.finished = true;
                self.buffer.clear();
                events.push(StreamEvent::Done);
                true
            }
            // Payloads cut mid-JSON by the upstream are expected; drop them.
            LineEvent::Malformed | LineEvent::Ignored => false,
        }
    }
}

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;
