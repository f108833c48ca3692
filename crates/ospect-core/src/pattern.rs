//! Low-level match shapes shared by the extractor catalog.
//!
//! Every parser in [`crate::show`] is one of three applications of a
//! named-capture-group pattern: a single search over the whole text, a
//! per-line scan of a table, or an iteration over repeating blocks.
//! The record constructor passed to each shape performs the per-field
//! coercion, so a failed coercion aborts the whole call.

use std::str::FromStr;

use regex::{Captures, Regex};

use crate::coerce::Scalar;
use crate::error::ExtractionError;

/// First match anywhere in the text, or `None` when the section is
/// absent. Patterns that span line boundaries enable `(?s)` inline.
pub fn single_match<T, F>(
    re: &Regex,
    text: &str,
    build: F,
) -> Result<Option<T>, ExtractionError>
where
    F: FnOnce(&Captures) -> Result<T, ExtractionError>,
{
    match re.captures(text) {
        Some(caps) => build(&caps).map(Some),
        None => Ok(None),
    }
}

/// One record per matching line, in line order. Lines that do not
/// match (headers, separators, blanks) are skipped, and a record can
/// never be assembled across a line boundary.
pub fn line_matches<T, F>(re: &Regex, text: &str, mut build: F) -> Result<Vec<T>, ExtractionError>
where
    F: FnMut(&Captures) -> Result<T, ExtractionError>,
{
    let mut records = Vec::new();
    for line in text.lines() {
        if let Some(caps) = re.captures(line) {
            records.push(build(&caps)?);
        }
    }
    Ok(records)
}

/// One record per non-overlapping occurrence across the whole text,
/// in order of appearance. Used for repeating multi-line blocks.
pub fn block_matches<T, F>(re: &Regex, text: &str, mut build: F) -> Result<Vec<T>, ExtractionError>
where
    F: FnMut(&Captures) -> Result<T, ExtractionError>,
{
    let mut records = Vec::new();
    for caps in re.captures_iter(text) {
        records.push(build(&caps)?);
    }
    Ok(records)
}

/// A required integer group. The patterns only capture digit runs
/// here, so failure means the token overflowed the field type.
pub fn int_field<T: FromStr>(caps: &Captures, name: &str) -> Result<T, ExtractionError> {
    let raw = &caps[name];
    raw.parse().map_err(|_| ExtractionError::Parse {
        field: name.to_string(),
        value: raw.to_string(),
    })
}

/// An optional integer group: `None` when the group did not
/// participate in the match (or is not present in this dialect's
/// pattern at all).
pub fn opt_int_field<T: FromStr>(
    caps: &Captures,
    name: &str,
) -> Result<Option<T>, ExtractionError> {
    match caps.name(name) {
        Some(m) => {
            let raw = m.as_str();
            raw.parse().map(Some).map_err(|_| ExtractionError::Parse {
                field: name.to_string(),
                value: raw.to_string(),
            })
        }
        None => Ok(None),
    }
}

/// A group coerced to int-or-text, for identifier columns whose shape
/// differs per dialect (numeric vs dotted-decimal area IDs).
pub fn scalar_field(caps: &Captures, name: &str) -> Scalar {
    Scalar::coerce(&caps[name])
}

/// An optional text group, as captured.
pub fn opt_text_field(caps: &Captures, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use super::*;

    lazy_static! {
        static ref PAIR: Regex =
            Regex::new(r"(?P<key>[a-z]+)=(?P<value>\d+)").unwrap();
    }

    fn pair(caps: &Captures) -> Result<(String, u32), ExtractionError> {
        Ok((caps["key"].to_string(), int_field(caps, "value")?))
    }

    #[test]
    fn test_single_match_absent_section() {
        let found = single_match(&PAIR, "nothing here", pair).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_line_matches_skips_nonmatching_lines() {
        let text = "header\na=1\nnoise\nb=2\n";
        let records = line_matches(&PAIR, text, pair).unwrap();
        assert_eq!(
            records,
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_line_matches_never_crosses_lines() {
        // The record only exists if the two lines are concatenated.
        let split = "a=\n1\n";
        assert!(line_matches(&PAIR, split, pair).unwrap().is_empty());
    }

    #[test]
    fn test_block_matches_in_order() {
        let text = "x=10 y=20 z=30";
        let records = block_matches(&PAIR, text, pair).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].0, "x");
        assert_eq!(records[2].1, 30);
    }

    #[test]
    fn test_int_field_overflow_is_an_error() {
        let caps = PAIR.captures("a=99999999999").unwrap();
        let overflow: Result<u32, _> = int_field(&caps, "value");
        assert!(matches!(overflow, Err(ExtractionError::Parse { .. })));
    }

    #[test]
    fn test_opt_int_field_absent_group() {
        let caps = PAIR.captures("a=1").unwrap();
        let missing: Option<u32> = opt_int_field(&caps, "no_such_group").unwrap();
        assert_eq!(missing, None);
    }
}
