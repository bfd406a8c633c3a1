use crate::domain::ports::TextSource;
use crate::utils::error::Result;

/// Pasted text already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for MemorySource {
    async fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
