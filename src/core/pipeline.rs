use crate::core::export::to_tsv;
use crate::core::projector::project_rows;
use crate::core::table_parser::parse_table;
use crate::domain::model::{RawRow, TransformResult};
use crate::utils::error::Result;
use chrono::Local;

/// Projects parsed rows and serializes the clipboard TSV in one step.
pub fn build_transform_result(rows: &[RawRow], filled_by: &str) -> Result<TransformResult> {
    let rows = project_rows(rows, filled_by);
    let tsv_output = to_tsv(&rows)?;
    Ok(TransformResult {
        rows,
        tsv_output,
        filled_by: filled_by.to_string(),
        processed_at: Local::now(),
    })
}

/// Whole pure pipeline: pasted text in, reformatted table out.
pub fn reformat(text: &str, filled_by: &str) -> Result<TransformResult> {
    let rows = parse_table(text)?;
    build_transform_result(&rows, filled_by)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;

    #[test]
    fn test_reformat_end_to_end() {
        let text = "Number\tShort description\tPriority\tState\tAssignment group\n\
                    INC100\tJob:OMS_PAYROLL_RUN_Friday failed\t1 - Critical\tNew\tPayroll IT\n\
                    \t\t4 - Low\tNew\t\n";
        let result = reformat(text, "Kim").unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].job_name, "OMS_PAYROLL_RUN");
        assert_eq!(result.rows[0].priority, "Critical");
        assert_eq!(
            result.tsv_output,
            "Number\tState\tPriority\tAssignment group\tfilled by\tJob name\n\
             INC100\tNew\tCritical\tPayroll IT\tKim\tOMS_PAYROLL_RUN"
        );
    }

    #[test]
    fn test_reformat_errors_pass_through() {
        assert!(matches!(reformat("", "Kim"), Err(EtlError::EmptyInput)));
        assert!(matches!(
            reformat("Caller\nJo", "Kim"),
            Err(EtlError::SchemaMismatch { .. })
        ));
    }
}
