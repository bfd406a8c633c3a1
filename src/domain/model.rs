use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ticket attributes recognised in the pasted header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalField {
    Number,
    Caller,
    ShortDescription,
    Priority,
    ConfigurationItem,
    State,
    AssignmentGroup,
    AssignedTo,
    SlaDue,
    Opened,
}

/// Header matching walks this slice front to back, so the first entry wins
/// if two canonical names ever collide.
pub const FIELD_HEADERS: [(LogicalField, &str); 10] = [
    (LogicalField::Number, "Number"),
    (LogicalField::Caller, "Caller"),
    (LogicalField::ShortDescription, "Short description"),
    (LogicalField::Priority, "Priority"),
    (LogicalField::ConfigurationItem, "Configuration item"),
    (LogicalField::State, "State"),
    (LogicalField::AssignmentGroup, "Assignment group"),
    (LogicalField::AssignedTo, "Assigned to"),
    (LogicalField::SlaDue, "SLA due"),
    (LogicalField::Opened, "Opened"),
];

/// Logical field -> zero-based column position, built from one header line.
pub type ColumnIndexMap = HashMap<LogicalField, usize>;

/// One pasted ticket line, reduced to the fields the report needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub number: String,
    pub state: String,
    pub priority: String,
    pub assignment_group: String,
    pub short_description: String,
}

/// Output column order. Serialization and rendering both follow it.
pub const OUTPUT_HEADERS: [&str; 6] = [
    "Number",
    "State",
    "Priority",
    "Assignment group",
    "filled by",
    "Job name",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub number: String,
    pub state: String,
    pub priority: String,
    pub assignment_group: String,
    pub filled_by: String,
    pub job_name: String,
}

impl OutputRow {
    /// Cells in `OUTPUT_HEADERS` order.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.number,
            &self.state,
            &self.priority,
            &self.assignment_group,
            &self.filled_by,
            &self.job_name,
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<OutputRow>,
    /// Always TSV; this is what goes to the clipboard.
    pub tsv_output: String,
    pub filled_by: String,
    pub processed_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub rows_written: usize,
    pub copied: Option<CopyMethod>,
}
