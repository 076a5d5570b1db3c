//! Turns loosely formatted planting/harvest descriptors into a canonical
//! [`MonthSet`].
//!
//! Crop sheets arrive from human-edited CSV exports, so the same column can
//! hold a numeric list (`"[5,6,9,10]"`, `"5;6"`) or Spanish three-letter
//! abbreviations with ranges (`"May-Jun · Sep-Oct"`). Parsing is strictly
//! two-stage: the numeric interpretation is attempted first and wins whenever
//! it yields at least one valid month; the textual interpretation is only
//! consulted when the numeric stage produced nothing. Unrecognized tokens
//! never fail the parse, they just contribute no months.

use crate::types::month::{MonthSet, MONTHS_PER_YEAR};

/// Three-letter Spanish month abbreviations, January first.
const MONTH_ABBREVIATIONS: [&str; MONTHS_PER_YEAR] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

fn month_from_abbreviation(token: &str) -> Option<u8> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == token)
        .map(|index| (index + 1) as u8)
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Parses a raw month descriptor into a canonical month set.
///
/// The result is de-duplicated and iterates in ascending order. Absent,
/// empty or unparseable input yields the empty set; this function never
/// fails.
///
/// # Examples
///
/// ```
/// use agroclima::parse_months;
///
/// assert_eq!(parse_months(Some("[5,6,9,10]")).to_vec(), vec![5, 6, 9, 10]);
/// assert_eq!(parse_months(Some("May-Jun · Sep-Oct")).to_vec(), vec![5, 6, 9, 10]);
/// // Ranges may wrap across the year boundary.
/// assert_eq!(parse_months(Some("Nov-Feb")).to_vec(), vec![1, 2, 11, 12]);
/// // Numeric tokens take precedence over textual ones.
/// assert_eq!(parse_months(Some("5,May")).to_vec(), vec![5]);
/// assert!(parse_months(None).is_empty());
/// ```
pub fn parse_months(raw: Option<&str>) -> MonthSet {
    let Some(raw) = raw else {
        return MonthSet::new();
    };
    if raw.is_empty() {
        return MonthSet::new();
    }
    let numeric = parse_numeric_months(raw);
    if !numeric.is_empty() {
        return numeric;
    }
    parse_spanish_months(raw)
}

/// Numeric stage: strip brackets and quotes, split on commas, semicolons and
/// whitespace, keep 1-2 digit tokens that land in `1..=12`.
fn parse_numeric_months(raw: &str) -> MonthSet {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect();
    cleaned
        .split(is_separator)
        .filter(|token| {
            !token.is_empty()
                && token.len() <= 2
                && token.bytes().all(|b| b.is_ascii_digit())
        })
        .filter_map(|token| token.parse::<u8>().ok())
        .collect()
}

/// Textual stage: tokens are single abbreviations or dash-joined inclusive
/// ranges. A range whose start exceeds its end wraps across the year
/// boundary. A range with an unrecognized endpoint is dropped entirely.
fn parse_spanish_months(raw: &str) -> MonthSet {
    if !raw.chars().any(|c| c.is_alphabetic()) {
        return MonthSet::new();
    }
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == '·' { ' ' } else { c })
        .collect();

    let mut months = MonthSet::new();
    for token in cleaned.split(is_separator).filter(|t| !t.is_empty()) {
        let upper = token.to_uppercase();
        if upper.contains('-') {
            let mut endpoints = upper.split('-');
            let start = endpoints.next().and_then(month_from_abbreviation);
            let end = endpoints.next().and_then(month_from_abbreviation);
            if let (Some(start), Some(end)) = (start, end) {
                months.insert_range(start, end);
            }
        } else if let Some(month) = month_from_abbreviation(&upper) {
            months.insert(month);
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bracketed_numeric_lists() {
        assert_eq!(parse_months(Some("[5,6,9,10]")).to_vec(), vec![5, 6, 9, 10]);
        assert_eq!(parse_months(Some("\"5\";\"6\"")).to_vec(), vec![5, 6]);
        assert_eq!(parse_months(Some("5;6:no 9,10")).to_vec(), vec![5, 9, 10]);
    }

    #[test]
    fn ignores_numbers_outside_the_calendar() {
        assert_eq!(parse_months(Some("0, 5, 13, 99")).to_vec(), vec![5]);
        // Three-digit tokens are not month numbers at all.
        assert!(parse_months(Some("005")).is_empty());
    }

    #[test]
    fn deduplicates_and_sorts_numeric_input() {
        assert_eq!(parse_months(Some("10 5 5;10,6")).to_vec(), vec![5, 6, 10]);
    }

    #[test]
    fn parses_single_abbreviations_case_insensitively() {
        assert_eq!(parse_months(Some("May Jun")).to_vec(), vec![5, 6]);
        assert_eq!(parse_months(Some("ene,DIC")).to_vec(), vec![1, 12]);
        assert_eq!(parse_months(Some("Ene. Feb.")).to_vec(), vec![1, 2]);
    }

    #[test]
    fn parses_abbreviation_ranges() {
        assert_eq!(parse_months(Some("May-Jun")).to_vec(), vec![5, 6]);
        assert_eq!(parse_months(Some("Sep-Oct")).to_vec(), vec![9, 10]);
        assert_eq!(
            parse_months(Some("May-Jun · Sep-Oct")).to_vec(),
            vec![5, 6, 9, 10]
        );
    }

    #[test]
    fn ranges_wrap_across_year_end() {
        assert_eq!(parse_months(Some("Nov-Feb")).to_vec(), vec![1, 2, 11, 12]);
        assert_eq!(
            parse_months(Some("Dic-Ene")).to_vec(),
            vec![1, 12]
        );
    }

    #[test]
    fn malformed_ranges_are_dropped_entirely() {
        assert!(parse_months(Some("May-Xyz")).is_empty());
        assert!(parse_months(Some("Xyz-Jun")).is_empty());
        assert!(parse_months(Some("-Jun")).is_empty());
        // The valid token still counts, the broken range does not.
        assert_eq!(parse_months(Some("May-Xyz Sep")).to_vec(), vec![9]);
    }

    #[test]
    fn numeric_interpretation_takes_precedence() {
        assert_eq!(parse_months(Some("5,May")).to_vec(), vec![5]);
        assert_eq!(parse_months(Some("May 7 Sep-Oct")).to_vec(), vec![7]);
    }

    #[test]
    fn empty_and_garbage_inputs_yield_the_empty_set() {
        assert!(parse_months(None).is_empty());
        assert!(parse_months(Some("")).is_empty());
        assert!(parse_months(Some("   ")).is_empty());
        assert!(parse_months(Some("xyz")).is_empty());
        assert!(parse_months(Some("---")).is_empty());
        assert!(parse_months(Some("··")).is_empty());
    }

    #[test]
    fn every_single_month_roundtrips() {
        for month in 1u8..=12 {
            let raw = format!("{month},{month} {month};{month}");
            assert_eq!(parse_months(Some(&raw)).to_vec(), vec![month]);
        }
    }
}
