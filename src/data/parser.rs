//! Reading Parser Module
//! Turns raw comma-separated sensor exports into a [`SeriesStore`].
//!
//! The first line is always a header and is skipped without inspection.
//! Every following line must split into exactly seven fields or it is dropped.

use crate::config::{CORTISOL_FIELD, FIELDS_PER_ROW, GSR_FIELD, HEART_RATE_FIELD};
use crate::data::SeriesStore;

/// Field separator
const DELIMITER: char = ',';

/// Parse raw text into a fresh store.
///
/// Malformed rows are skipped silently. Cells without a numeric prefix become
/// `NaN` and are stored as-is.
pub fn parse_readings(raw: &str) -> SeriesStore {
    let mut store = SeriesStore::new();
    let mut records = 0usize;

    for (index, record) in raw.trim().split('\n').skip(1).enumerate() {
        records += 1;

        let fields: Vec<&str> = record.split(DELIMITER).map(str::trim).collect();
        if fields.len() != FIELDS_PER_ROW {
            continue;
        }

        store.push_reading(
            format!("Reading {}", index + 1),
            parse_number(fields[HEART_RATE_FIELD]),
            parse_number(fields[GSR_FIELD]),
            parse_number(fields[CORTISOL_FIELD]),
        );
    }

    tracing::debug!(
        records,
        accepted = store.len(),
        "parsed sensor readings"
    );

    store
}

/// Convert the longest numeric prefix of `field`, or `NaN` when there is none.
///
/// `"72.5 bpm"` reads as `72.5`, `"1e3"` as `1000`, `"abc"` as `NaN`.
pub fn parse_number(field: &str) -> f64 {
    let prefix = numeric_prefix(field.trim_start());
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse().unwrap_or(f64::NAN)
}

/// Longest prefix shaped like `[+-](Infinity | digits[.digits] | .digits)[e[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if s[pos..].starts_with("Infinity") {
        // Rust spells it "inf"
        return match &s[..pos] {
            "-" => "-inf",
            _ => "inf",
        };
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    &s[..pos]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "timestamp,subject,heart_rate,gsr,temp,spo2,cortisol";

    #[test]
    fn test_reads_expected_columns() {
        let content = format!("{HEADER}\nt,t,72.5,0.31,t,t,0.8");
        let store = parse_readings(&content);

        assert_eq!(store.len(), 1);
        assert_eq!(store.labels()[0], "Reading 1");
        assert_eq!(store.heart_rate()[0], 72.5);
        assert_eq!(store.gsr()[0], 0.31);
        assert_eq!(store.cortisol()[0], 0.8);
    }

    #[test]
    fn test_all_sequences_match_row_count() {
        let mut content = HEADER.to_string();
        for i in 0..25 {
            content.push_str(&format!("\n{i},s1,{},{},36.6,98,{}", 60 + i, i, 0.5));
        }
        let store = parse_readings(&content);

        assert_eq!(store.len(), 25);
        assert_eq!(store.heart_rate().len(), 25);
        assert_eq!(store.gsr().len(), 25);
        assert_eq!(store.cortisol().len(), 25);
        for (i, label) in store.labels().iter().enumerate() {
            assert_eq!(label, &format!("Reading {}", i + 1));
        }
    }

    #[test]
    fn test_wrong_field_count_is_skipped() {
        let content = format!(
            "{HEADER}\n1,a,70,0.2,x,y\n2,a,71,0.3,x,y,0.9\n3,a,72,0.4,x,y,1.0,extra"
        );
        let store = parse_readings(&content);

        assert_eq!(store.len(), 1);
        assert_eq!(store.heart_rate(), &[71.0]);
    }

    #[test]
    fn test_labels_follow_record_position() {
        let content = format!("{HEADER}\nbad\n2,a,71,0.3,x,y,0.9\n\n4,a,73,0.5,x,y,1.1");
        let store = parse_readings(&content);

        assert_eq!(store.labels(), &["Reading 2", "Reading 4"]);
    }

    #[test]
    fn test_header_is_never_data() {
        let store = parse_readings("1,a,70,0.2,x,y,0.9\n2,a,71,0.3,x,y,1.0");
        assert_eq!(store.len(), 1);
        assert_eq!(store.heart_rate(), &[71.0]);
    }

    #[test]
    fn test_empty_and_header_only() {
        assert!(parse_readings("").is_empty());
        assert!(parse_readings(HEADER).is_empty());
        assert!(parse_readings(&format!("{HEADER}\n\n")).is_empty());
    }

    #[test]
    fn test_crlf_and_padding() {
        let content = format!("{HEADER}\r\n 1 , a , 80 , 0.7 , x , y , 1.2 \r\n");
        let store = parse_readings(&content);

        assert_eq!(store.len(), 1);
        assert_eq!(store.heart_rate()[0], 80.0);
        assert_eq!(store.cortisol()[0], 1.2);
    }

    #[test]
    fn test_non_numeric_passes_through_as_nan() {
        let content = format!("{HEADER}\n1,a,n/a,,x,y,high");
        let store = parse_readings(&content);

        assert_eq!(store.len(), 1);
        assert!(store.heart_rate()[0].is_nan());
        assert!(store.gsr()[0].is_nan());
        assert!(store.cortisol()[0].is_nan());
    }

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number("72.5bpm"), 72.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("1.5E-1x"), 0.15);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
    }
}
