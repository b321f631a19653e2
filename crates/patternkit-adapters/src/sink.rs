//! Message sink that records instead of printing.

use std::sync::Mutex;

use patternkit_core::application::ports::{MessageLevel, MessageSink};

/// Collects every message in order.
///
/// Used by tests and by the CLI's JSON mode, where the report is printed
/// instead of the console lines.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages so far.
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Messages on one channel.
    pub fn at(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}
