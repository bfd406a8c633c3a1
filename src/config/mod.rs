pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::ConfigProvider;
    use crate::domain::model::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "ticket-etl")]
    #[command(about = "Reformat pasted incident tickets into the reporting sheet layout")]
    pub struct CliConfig {
        /// File holding the pasted table; reads stdin when omitted
        #[arg(short, long)]
        pub input: Option<String>,

        /// Value for the 'filled by' column
        #[arg(short, long, default_value = "")]
        pub filled_by: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        pub format: OutputFormat,

        /// Copy the TSV result to the clipboard
        #[arg(long)]
        pub copy: bool,

        /// Clipboard command to pipe into, e.g. "xclip -selection clipboard"
        #[arg(long, value_delimiter = ' ')]
        pub clipboard_command: Option<Vec<String>>,

        /// Print an aligned preview table to stderr
        #[arg(long)]
        pub preview: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> Option<&str> {
            self.input.as_deref()
        }

        fn filled_by(&self) -> &str {
            &self.filled_by
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn copy_to_clipboard(&self) -> bool {
            self.copy
        }

        fn clipboard_command(&self) -> Option<&[String]> {
            self.clipboard_command.as_deref()
        }

        fn preview(&self) -> bool {
            self.preview
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(input) = &self.input {
                validation::validate_path("input", input)?;
            }
            if let Some(command) = &self.clipboard_command {
                validation::validate_command("clipboard_command", command)?;
            }
            validation::warn_if_blank("filled_by", &self.filled_by);
            Ok(())
        }
    }

}
