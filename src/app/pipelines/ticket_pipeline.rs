use crate::adapters::clipboard::{copy_with_fallback, CommandClipboard, Osc52Clipboard};
use crate::app::render::render_table;
use crate::core::export::render_output;
use crate::core::pipeline::build_transform_result;
use crate::core::table_parser::parse_table;
use crate::core::{ClipboardSink, ConfigProvider, Pipeline, TextSource};
use crate::domain::model::{LoadOutcome, RawRow, TransformResult};
use crate::utils::error::{EtlError, Result};
use std::io::Write;
use std::sync::Mutex;

type SharedWriter = Mutex<Box<dyn Write + Send>>;

fn write_block(writer: &SharedWriter, text: &str) -> Result<()> {
    let mut writer = writer.lock().map_err(|_| EtlError::ProcessingError {
        message: "output writer lock poisoned".to_string(),
    })?;
    writeln!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}

pub struct TicketPipeline<S: TextSource, C: ConfigProvider> {
    source: S,
    config: C,
    output: SharedWriter,
    preview_output: SharedWriter,
    primary_clipboard: Box<dyn ClipboardSink>,
    fallback_clipboard: Box<dyn ClipboardSink>,
}

impl<S: TextSource, C: ConfigProvider> TicketPipeline<S, C> {
    /// Output to stdout, preview to stderr, clipboard from config or platform default.
    pub fn new(source: S, config: C) -> Self {
        let primary = config
            .clipboard_command()
            .and_then(CommandClipboard::new)
            .unwrap_or_else(CommandClipboard::detect);

        Self {
            source,
            config,
            output: Mutex::new(Box::new(std::io::stdout())),
            preview_output: Mutex::new(Box::new(std::io::stderr())),
            primary_clipboard: Box::new(primary),
            fallback_clipboard: Box::new(Osc52Clipboard::stderr()),
        }
    }

    pub fn with_output(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.output = Mutex::new(writer);
        self
    }

    pub fn with_preview_output(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.preview_output = Mutex::new(writer);
        self
    }

    pub fn with_clipboards(
        mut self,
        primary: Box<dyn ClipboardSink>,
        fallback: Box<dyn ClipboardSink>,
    ) -> Self {
        self.primary_clipboard = primary;
        self.fallback_clipboard = fallback;
        self
    }
}

#[async_trait::async_trait]
impl<S: TextSource, C: ConfigProvider> Pipeline for TicketPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRow>> {
        let text = self.source.read_text().await?;
        tracing::debug!("Read {} bytes of pasted text", text.len());
        parse_table(&text)
    }

    async fn transform(&self, data: Vec<RawRow>) -> Result<TransformResult> {
        let result = build_transform_result(&data, self.config.filled_by())?;

        let with_job = result.rows.iter().filter(|r| !r.job_name.is_empty()).count();
        tracing::info!(
            "🔧 Transformed {} rows ({} with a job name)",
            result.rows.len(),
            with_job
        );
        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<LoadOutcome> {
        let rendered = render_output(self.config.output_format(), &result)?;
        write_block(&self.output, &rendered)?;

        if self.config.preview() {
            write_block(&self.preview_output, &render_table(&result.rows))?;
        }

        let copied = if self.config.copy_to_clipboard() {
            Some(copy_with_fallback(
                self.primary_clipboard.as_ref(),
                self.fallback_clipboard.as_ref(),
                &result.tsv_output,
            )?)
        } else {
            None
        };

        Ok(LoadOutcome {
            rows_written: result.rows.len(),
            copied,
        })
    }
}
