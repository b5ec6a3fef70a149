use super::document_sink_trait::DocumentSink;
use std::sync::Mutex;
use tracing::debug;

/// In-process document holding the most recently applied relay reply
#[derive(Default)]
pub struct MemoryDocument {
    content: Mutex<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document content
    pub fn content(&self) -> String {
        self.content.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DocumentSink for MemoryDocument {
    fn replace(&self, html: &str) {
        let mut content = self.content.lock().unwrap_or_else(|e| e.into_inner());
        debug!(
            previous_len = content.len(),
            new_len = html.len(),
            "Replacing document content"
        );
        *content = html.to_string();
    }
}
