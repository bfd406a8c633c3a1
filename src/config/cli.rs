use crate::domain::ports::TextSource;
use crate::utils::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// Reads the pasted table from a file, or from stdin when no path (or `-`) is given.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: Option<PathBuf>,
}

impl LocalSource {
    pub fn new(path: Option<&str>) -> Self {
        Self {
            path: path.filter(|p| *p != "-").map(PathBuf::from),
        }
    }

    pub fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

impl TextSource for LocalSource {
    async fn read_text(&self) -> Result<String> {
        match &self.path {
            Some(path) => Ok(tokio::fs::read_to_string(path).await?),
            None => {
                // 從剪貼簿貼上的內容通常透過管線傳入
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}
