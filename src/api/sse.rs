//! Incremental decoder for server-sent event streams
//!
//! Only the `data` field matters to us: each event's data lines are joined
//! with `\n` and handed out once the blank line terminating the event arrives.
//! Comment lines (`:`) and other fields (`event`, `id`, `retry`) are ignored.

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Bytes of an incomplete line (may end inside a UTF-8 sequence)
    pending: Vec<u8>,
    /// Data lines of the event being assembled
    data: Vec<String>,
    /// Complete event payloads not yet taken
    ready: VecDeque<String>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of the response body
    pub fn push(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);

        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.pending.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = String::from_utf8_lossy(&line).into_owned();
            self.process_line(&line);
        }
    }

    /// Take the next complete event payload
    pub fn next_payload(&mut self) -> Option<String> {
        self.ready.pop_front()
    }

    fn process_line(&mut self, line: &str) {
        if line.is_empty() {
            if !self.data.is_empty() {
                self.ready.push_back(self.data.join("\n"));
                self.data.clear();
            }
            return;
        }
        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        if field == "data" {
            self.data.push(value.to_string());
        }
    }
}
