use crate::domain::model::{ColumnIndexMap, LogicalField, RawRow, FIELD_HEADERS};
use crate::utils::error::{EtlError, Result};

/// Maps header cells to logical fields by trimmed, case-insensitive equality.
/// When a field shows up in more than one column the first column is kept.
pub fn build_column_map(headers: &[&str]) -> ColumnIndexMap {
    let mut map = ColumnIndexMap::new();

    for (position, header) in headers.iter().enumerate() {
        let header = header.trim().to_lowercase();
        let matched = FIELD_HEADERS
            .iter()
            .find(|(_, name)| name.to_lowercase() == header);

        if let Some((field, _)) = matched {
            map.entry(*field).or_insert(position);
        }
    }

    map
}

fn cell(cols: &[&str], map: &ColumnIndexMap, field: LogicalField) -> String {
    map.get(&field)
        .and_then(|&idx| cols.get(idx))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Parses pasted tab-separated ticket text. The first non-blank line is the header.
pub fn parse_table(text: &str) -> Result<Vec<RawRow>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(EtlError::EmptyInput)?;
    let headers: Vec<&str> = header_line.split('\t').collect();
    let map = build_column_map(&headers);

    if !map.contains_key(&LogicalField::Number)
        && !map.contains_key(&LogicalField::ShortDescription)
    {
        return Err(EtlError::SchemaMismatch {
            headers: headers.iter().map(|h| h.trim().to_string()).collect(),
        });
    }

    tracing::debug!("Header columns mapped: {:?}", map);

    let mut rows = Vec::new();
    for line in lines {
        let cols: Vec<&str> = line.split('\t').collect();
        let row = RawRow {
            number: cell(&cols, &map, LogicalField::Number),
            state: cell(&cols, &map, LogicalField::State),
            priority: cell(&cols, &map, LogicalField::Priority),
            assignment_group: cell(&cols, &map, LogicalField::AssignmentGroup),
            short_description: cell(&cols, &map, LogicalField::ShortDescription),
        };

        // 沒有編號也沒有描述的列直接略過
        if row.number.is_empty() && row.short_description.is_empty() {
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Number\tCaller\tShort description\tPriority\tConfiguration item\tState\tAssignment group\tAssigned to\tSLA due\tOpened";

    #[test]
    fn test_parse_full_header() {
        let text = format!(
            "{}\nINC0012345\tJohn\tUAC Job:OMS_DAILY_LOAD failed\t2 - High\tuac-prod\tNew\tOMS Support\tMary\t2024-05-01\t2024-04-30",
            HEADER
        );
        let rows = parse_table(&text).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, "INC0012345");
        assert_eq!(rows[0].state, "New");
        assert_eq!(rows[0].priority, "2 - High");
        assert_eq!(rows[0].assignment_group, "OMS Support");
        assert_eq!(rows[0].short_description, "UAC Job:OMS_DAILY_LOAD failed");
    }

    #[test]
    fn test_header_matching_is_case_insensitive_and_trimmed() {
        let map = build_column_map(&["PRIORITY", "priority ", " number", "Short Description"]);
        assert_eq!(map.get(&LogicalField::Priority), Some(&0));
        assert_eq!(map.get(&LogicalField::Number), Some(&2));
        assert_eq!(map.get(&LogicalField::ShortDescription), Some(&3));
    }

    #[test]
    fn test_unknown_headers_are_ignored() {
        let map = build_column_map(&["Number", "Category", "Updated"]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_table(""), Err(EtlError::EmptyInput)));
        assert!(matches!(parse_table("  \n\t\n \r\n"), Err(EtlError::EmptyInput)));
    }

    #[test]
    fn test_schema_mismatch() {
        let err = parse_table("Caller\tPriority\nJohn\t1 - Critical").unwrap_err();
        match err {
            EtlError::SchemaMismatch { headers } => {
                assert_eq!(headers, vec!["Caller".to_string(), "Priority".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let rows = parse_table("Number\tState\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_short_rows_yield_empty_cells() {
        let rows = parse_table("Number\tState\tPriority\nINC1\nINC2\tNew").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, "");
        assert_eq!(rows[0].priority, "");
        assert_eq!(rows[1].state, "New");
    }

    #[test]
    fn test_rows_without_number_or_description_are_dropped() {
        let text = "Number\tShort description\tState\tPriority\n\t\tNew\t1 - Critical\nINC2\t\tClosed\t\n\tonly description\t\t";
        let rows = parse_table(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, "INC2");
        assert_eq!(rows[1].short_description, "only description");
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = "Number\tState\r\n\r\nINC1\tNew\r\n   \r\nINC2\tClosed\r\n";
        let rows = parse_table(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, "New");
        assert_eq!(rows[1].number, "INC2");
    }

    #[test]
    fn test_duplicate_header_keeps_first_column() {
        let rows = parse_table("Number\tState\tstate\nINC1\tNew\tClosed").unwrap();
        assert_eq!(rows[0].state, "New");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let rows = parse_table("State\tAssignment group\tNumber\nNew\tDB Team\tINC9").unwrap();
        assert_eq!(rows[0].number, "INC9");
        assert_eq!(rows[0].assignment_group, "DB Team");
    }
}
