use crate::adapters::notify::TracingNotifier;
use crate::core::{Notifier, Pipeline, Severity};
use crate::domain::model::{CopyMethod, LoadOutcome, TransformResult};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    notifier: Box<dyn Notifier>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::with_notifier(pipeline, Box::new(TracingNotifier))
    }

    pub fn with_notifier(pipeline: P, notifier: Box<dyn Notifier>) -> Self {
        Self { pipeline, notifier }
    }

    fn report<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.notifier.notify(&e.user_friendly_message(), Severity::Error);
        }
        result
    }

    async fn process(&self) -> Result<TransformResult> {
        tracing::info!("Extracting tickets...");
        let raw_rows = self.report(self.pipeline.extract().await)?;
        tracing::info!("Extracted {} ticket rows", raw_rows.len());

        let result = self.report(self.pipeline.transform(raw_rows).await)?;
        self.notifier.notify(
            &format!("Processed {} row(s)", result.rows.len()),
            Severity::Success,
        );
        Ok(result)
    }

    /// Extract and transform only; nothing is written or copied.
    pub async fn dry_run(&self) -> Result<TransformResult> {
        self.process().await
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        let result = self.process().await?;

        tracing::info!("Writing output...");
        let outcome = self.report(self.pipeline.load(result).await)?;

        match outcome.copied {
            Some(CopyMethod::Primary) => self
                .notifier
                .notify("Copied to clipboard", Severity::Success),
            Some(CopyMethod::Fallback) => self.notifier.notify(
                "Copied to clipboard via terminal (OSC 52)",
                Severity::Success,
            ),
            None => {}
        }

        Ok(outcome)
    }
}
