pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::source::MemorySource;
pub use config::cli::LocalSource;
pub use config::toml_config::TomlConfig;
pub use crate::core::etl::EtlEngine;
pub use app::pipelines::ticket_pipeline::TicketPipeline;
pub use crate::core::pipeline::reformat;
pub use domain::model::{OutputFormat, OutputRow, RawRow};
pub use utils::error::{EtlError, Result};
