use crate::domain::model::{LoadOutcome, OutputFormat, RawRow, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the pasted text comes from.
pub trait TextSource: Send + Sync {
    fn read_text(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn filled_by(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn copy_to_clipboard(&self) -> bool;
    fn clipboard_command(&self) -> Option<&[String]>;
    fn preview(&self) -> bool;
}

pub trait ClipboardSink: Send + Sync {
    fn name(&self) -> &str;
    fn copy_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRow>>;
    async fn transform(&self, data: Vec<RawRow>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<LoadOutcome>;
}
