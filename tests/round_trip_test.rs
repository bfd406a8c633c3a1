use anyhow::Result;
use ticket_etl::core::export::to_tsv;
use ticket_etl::core::job_name::extract_job_name;
use ticket_etl::core::priority::normalize_priority;
use ticket_etl::core::table_parser::parse_table;
use ticket_etl::reformat;

const TICKETS: &str = "number\tSTATE\tpriority \t Short description\tAssignment Group
INC1\tNew\t2 - High\tApp:OMS_ORDER_IMPORT failed\tOrders
INC2\tResolved\t3 - Moderate\tWF:OMS_Stock_Sync_Wednesday rerun\tInventory
INC3\tClosed\t\tno job here\t
";

#[test]
fn test_output_reparses_to_same_values() -> Result<()> {
    let first = reformat(TICKETS, "Ana")?;
    let reparsed = parse_table(&first.tsv_output)?;

    assert_eq!(reparsed.len(), first.rows.len());
    for (raw, out) in reparsed.iter().zip(&first.rows) {
        assert_eq!(raw.number, out.number);
        assert_eq!(raw.state, out.state);
        assert_eq!(raw.priority, out.priority);
        assert_eq!(raw.assignment_group, out.assignment_group);
        // The output has no 'Short description' column.
        assert_eq!(raw.short_description, "");
    }
    Ok(())
}

#[test]
fn test_reformat_is_stable_on_its_own_output() -> Result<()> {
    let first = reformat(TICKETS, "Ana")?;
    let second = reformat(&first.tsv_output, "Ana")?;

    let priorities: Vec<&str> = second.rows.iter().map(|r| r.priority.as_str()).collect();
    assert_eq!(priorities, vec!["High", "Medium", ""]);
    assert_eq!(to_tsv(&second.rows)?.lines().count(), 4);
    Ok(())
}

#[test]
fn test_mixed_case_headers_and_job_names() -> Result<()> {
    let result = reformat(TICKETS, "")?;
    let jobs: Vec<&str> = result.rows.iter().map(|r| r.job_name.as_str()).collect();

    assert_eq!(jobs, vec!["OMS_ORDER_IMPORT", "OMS_STOCK_SYNC", ""]);
    assert_eq!(result.rows[1].assignment_group, "Inventory");
    Ok(())
}

#[test]
fn test_descriptions_without_pattern_never_yield_a_job() {
    let descriptions = [
        "",
        "OMS_DAILY failed",
        "Job: OMS",
        "Job : OMS-DAILY",
        "Job:OMSDAILY",
        "ticket about OMS_ without colon: none",
    ];
    for description in descriptions {
        assert_eq!(extract_job_name(description), "", "{:?}", description);
    }
}

#[test]
fn test_priority_examples() {
    assert_eq!(normalize_priority("2 - High"), "High");
    assert_eq!(normalize_priority("3 - Moderate"), "Medium");
    assert_eq!(normalize_priority(""), "");
}
