use crate::core::job_name::extract_job_name;
use crate::core::priority::normalize_priority;
use crate::domain::model::{OutputRow, RawRow};

pub fn project_row(row: &RawRow, filled_by: &str) -> OutputRow {
    OutputRow {
        number: row.number.clone(),
        state: row.state.clone(),
        priority: normalize_priority(&row.priority),
        assignment_group: row.assignment_group.clone(),
        filled_by: filled_by.to_string(),
        job_name: extract_job_name(&row.short_description),
    }
}

/// One output row per parsed row, same order.
pub fn project_rows(rows: &[RawRow], filled_by: &str) -> Vec<OutputRow> {
    rows.iter().map(|row| project_row(row, filled_by)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_row() {
        let raw = RawRow {
            number: "INC0042".into(),
            state: "In Progress".into(),
            priority: "3 - Moderate".into(),
            assignment_group: "Batch Ops".into(),
            short_description: "UAC Job:OMS_INVOICE_SYNC_2023 failed".into(),
        };
        let out = project_row(&raw, "Dana");

        assert_eq!(out.number, "INC0042");
        assert_eq!(out.state, "In Progress");
        assert_eq!(out.priority, "Medium");
        assert_eq!(out.assignment_group, "Batch Ops");
        assert_eq!(out.filled_by, "Dana");
        assert_eq!(out.job_name, "OMS_INVOICE_SYNC");
    }

    #[test]
    fn test_project_rows_preserves_order_and_blanks() {
        let rows = vec![
            RawRow {
                number: "INC2".into(),
                ..Default::default()
            },
            RawRow {
                number: "INC1".into(),
                ..Default::default()
            },
        ];
        let out = project_rows(&rows, "");
        assert_eq!(out[0].number, "INC2");
        assert_eq!(out[1].number, "INC1");
        assert_eq!(out[1].priority, "");
        assert_eq!(out[1].job_name, "");
    }
}
