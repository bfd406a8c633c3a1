//! Canonical job-name extraction from free-text ticket descriptions.
//!
//! Descriptions look like `UAC Job:wf_X Application:OMS_SOME_JOB_Sunday_...`.
//! Every `:OMS_<word>` occurrence is a candidate; upper-case candidates win
//! over mixed-case ones, longer over shorter. A trailing date fragment
//! (`_Sunday`, `-March`, `_2024`, ...) is cut off before upper-casing.

use regex::Regex;
use std::sync::LazyLock;

static JOB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i):\s*OMS_([A-Za-z0-9_]+)").expect("job pattern is valid")
});

/// A separator followed by exactly four digits.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-][0-9]{4}(?:[^0-9]|$)").expect("year pattern is valid"));

const DATE_KEYWORDS: [&str; 19] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static KEYWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DATE_KEYWORDS
        .iter()
        .map(|keyword| {
            Regex::new(&format!("(?i)[_-]{}", keyword)).expect("keyword pattern is valid")
        })
        .collect()
});

/// All `OMS_...` candidates in order of appearance.
pub fn find_candidates(description: &str) -> Vec<String> {
    JOB_PATTERN
        .captures_iter(description)
        .map(|caps| format!("OMS_{}", &caps[1]))
        .collect()
}

fn is_upper(candidate: &str) -> bool {
    candidate == candidate.to_uppercase()
}

/// Longest candidate; on equal length the earlier one is kept.
fn longest<'a>(candidates: impl Iterator<Item = &'a String>) -> Option<&'a String> {
    candidates.fold(None, |best, candidate| match best {
        Some(current) if current.len() >= candidate.len() => Some(current),
        _ => Some(candidate),
    })
}

pub fn select_candidate(candidates: &[String]) -> Option<&String> {
    longest(candidates.iter().filter(|c| is_upper(c))).or_else(|| longest(candidates.iter()))
}

/// Cuts a trailing date fragment.
///
/// Keywords are tried in order and the year check is repeated inside every
/// keyword iteration, so the first iteration that finds either one wins. In
/// effect `_Sunday` beats a bare year, and a bare year beats every other
/// weekday or month, even when that keyword appears earlier in the text.
pub fn strip_date_suffix(candidate: &str) -> &str {
    for pattern in KEYWORD_PATTERNS.iter() {
        if let Some(found) = pattern.find(candidate) {
            return &candidate[..found.start()];
        }
        if let Some(found) = YEAR_PATTERN.find(candidate) {
            return &candidate[..found.start()];
        }
    }
    candidate
}

/// Best-guess canonical job name, or an empty string when the description has none.
pub fn extract_job_name(description: &str) -> String {
    let candidates = find_candidates(description);
    let Some(chosen) = select_candidate(&candidates) else {
        return String::new();
    };

    let job_name = strip_date_suffix(chosen).to_uppercase();
    tracing::debug!(
        "Job name '{}' chosen from {} candidate(s)",
        job_name,
        candidates.len()
    );
    job_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pattern_returns_empty() {
        assert_eq!(extract_job_name(""), "");
        assert_eq!(extract_job_name("Disk usage above 90% on host db01"), "");
        assert_eq!(extract_job_name("Job OMS_DAILY without colon"), "");
        assert_eq!(extract_job_name("Job: OMS_"), "");
    }

    #[test]
    fn test_storm_caster_description() {
        let description = "UAC Job:wf_StormCaster_DEP_OMS_Feed Application:OMS_STORM_CASTER_DEP_OMS_FEED_Sunday...";
        assert_eq!(
            extract_job_name(description),
            "OMS_STORM_CASTER_DEP_OMS_FEED"
        );
    }

    #[test]
    fn test_single_upper_case_occurrence_is_returned() {
        assert_eq!(
            extract_job_name("Failure in Job: OMS_BILLING_EXPORT please check"),
            "OMS_BILLING_EXPORT"
        );
    }

    #[test]
    fn test_whitespace_after_colon_and_case_insensitive_prefix() {
        assert_eq!(extract_job_name("Job:\t oms_nightly_sync"), "OMS_NIGHTLY_SYNC");
    }

    #[test]
    fn test_upper_case_candidate_preferred_over_longer_mixed_case() {
        let description = "Workflow:OMS_Very_Long_Mixed_Case_Name Job:OMS_SHORT";
        assert_eq!(extract_job_name(description), "OMS_SHORT");
    }

    #[test]
    fn test_longest_upper_case_candidate_wins() {
        let description = "A:OMS_ONE B:OMS_ONE_TWO_THREE C:OMS_ONE_TWO";
        assert_eq!(extract_job_name(description), "OMS_ONE_TWO_THREE");
    }

    #[test]
    fn test_mixed_case_fallback_keeps_first_on_tie() {
        let candidates = vec!["OMS_Abc".to_string(), "OMS_Xyz".to_string()];
        assert_eq!(select_candidate(&candidates), Some(&candidates[0]));
    }

    #[test]
    fn test_strip_weekday_and_month() {
        assert_eq!(strip_date_suffix("OMS_LOAD_Monday_RUN"), "OMS_LOAD");
        assert_eq!(strip_date_suffix("OMS_LOAD-january_RUN"), "OMS_LOAD");
        assert_eq!(strip_date_suffix("OMS_LOAD_DECEMBER"), "OMS_LOAD");
        assert_eq!(strip_date_suffix("OMS_LOAD_ONLY"), "OMS_LOAD_ONLY");
    }

    #[test]
    fn test_strip_bare_year() {
        assert_eq!(strip_date_suffix("OMS_REPORT_2024_01"), "OMS_REPORT");
        assert_eq!(strip_date_suffix("OMS_REPORT_2024"), "OMS_REPORT");
        assert_eq!(strip_date_suffix("OMS_REPORT_12345"), "OMS_REPORT_12345");
        assert_eq!(strip_date_suffix("OMS_REPORT_123"), "OMS_REPORT_123");
    }

    #[test]
    fn test_year_beats_later_keywords_but_not_sunday() {
        // Monday comes first in the text, but the year check runs in the Sunday iteration.
        assert_eq!(strip_date_suffix("OMS_JOB_Monday_2024"), "OMS_JOB_Monday");
        assert_eq!(strip_date_suffix("OMS_JOB_2024_Sunday"), "OMS_JOB_2024");
        assert_eq!(strip_date_suffix("OMS_JOB_A_2024_B_Sunday"), "OMS_JOB_A_2024_B");
    }

    #[test]
    fn test_result_is_upper_cased() {
        assert_eq!(extract_job_name("x:OMS_mixed_Case_Tuesday"), "OMS_MIXED_CASE");
    }
}
