pub mod etl;
pub mod export;
pub mod job_name;
pub mod pipeline;
pub mod priority;
pub mod projector;
pub mod table_parser;

pub use crate::domain::model::{OutputRow, RawRow, TransformResult};
pub use crate::domain::ports::{
    ClipboardSink, ConfigProvider, Notifier, Pipeline, Severity, TextSource,
};
pub use crate::utils::error::Result;
