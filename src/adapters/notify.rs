use crate::domain::ports::{Notifier, Severity};

/// Default notifier: every message becomes a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => tracing::info!("✅ {}", message),
            Severity::Error => tracing::error!("❌ {}", message),
        }
    }
}
