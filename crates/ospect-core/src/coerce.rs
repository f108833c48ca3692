//! Scalar coercion shared by every show-output parser.
//!
//! CLI tables mix counters, dotted-decimal identifiers and interface
//! names in the same columns, so captured tokens are coerced to
//! integers whenever they look like one and kept as text otherwise.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// A captured field value: an integer when the token is fully numeric,
/// otherwise the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl Scalar {
    /// Coerce a captured token. Total: a token that is not an
    /// optionally-signed decimal integer is returned as text unchanged.
    pub fn coerce(token: &str) -> Scalar {
        match token.parse::<i64>() {
            Ok(n) => Scalar::Int(n),
            Err(_) => Scalar::Text(token.to_string()),
        }
    }

    /// The integer value, when this scalar holds one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }

    /// The text value, when this scalar holds one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Int(_) => None,
            Scalar::Text(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Convert an `hh:mm:ss` duration token to total seconds.
///
/// The hour component is unbounded (uptimes routinely exceed 24h).
/// Anything other than exactly three numeric components is a
/// [`ExtractionError::MalformedDuration`] and aborts the calling parse.
pub fn duration_secs(token: &str) -> Result<u64, ExtractionError> {
    let malformed = || ExtractionError::MalformedDuration {
        token: token.to_string(),
    };

    let parts: Vec<&str> = token.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(malformed());
    };

    let hours: u64 = hours.parse().map_err(|_| malformed())?;
    let minutes: u64 = minutes.parse().map_err(|_| malformed())?;
    let seconds: u64 = seconds.parse().map_err(|_| malformed())?;

    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Numeric value of a dotted-decimal identifier (`0.0.0.51` -> 51),
/// used where a dialect prints area IDs in address notation.
pub fn dotted_decimal_value(token: &str) -> Result<u32, ExtractionError> {
    token
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| ExtractionError::Parse {
            field: "id_dd".to_string(),
            value: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integers() {
        assert_eq!(Scalar::coerce("42"), Scalar::Int(42));
        assert_eq!(Scalar::coerce("-3"), Scalar::Int(-3));
        assert_eq!(Scalar::coerce("0"), Scalar::Int(0));
    }

    #[test]
    fn test_coerce_text_unchanged() {
        assert_eq!(Scalar::coerce("Gi0/1"), Scalar::Text("Gi0/1".to_string()));
        assert_eq!(
            Scalar::coerce("10.0.0.1"),
            Scalar::Text("10.0.0.1".to_string())
        );
        assert_eq!(Scalar::coerce(""), Scalar::Text(String::new()));
    }

    #[test]
    fn test_coerce_idempotent() {
        let first = Scalar::coerce("42");
        let again = Scalar::coerce(&first.to_string());
        assert_eq!(first, again);
    }

    #[test]
    fn test_duration_secs() {
        assert_eq!(duration_secs("01:02:03").unwrap(), 3723);
        assert_eq!(duration_secs("00:00:35").unwrap(), 35);
        // Uptimes can exceed a day; no bounds check on the hour field.
        assert_eq!(duration_secs("100:00:01").unwrap(), 360001);
    }

    #[test]
    fn test_duration_wrong_arity() {
        assert!(matches!(
            duration_secs("02:03"),
            Err(ExtractionError::MalformedDuration { .. })
        ));
        assert!(matches!(
            duration_secs("1:2:3:4"),
            Err(ExtractionError::MalformedDuration { .. })
        ));
    }

    #[test]
    fn test_duration_junk_component() {
        assert!(matches!(
            duration_secs("aa:bb:cc"),
            Err(ExtractionError::MalformedDuration { .. })
        ));
        assert!(matches!(
            duration_secs("::"),
            Err(ExtractionError::MalformedDuration { .. })
        ));
    }

    #[test]
    fn test_dotted_decimal_value() {
        assert_eq!(dotted_decimal_value("0.0.0.0").unwrap(), 0);
        assert_eq!(dotted_decimal_value("0.0.0.51").unwrap(), 51);
        assert_eq!(dotted_decimal_value("10.0.0.1").unwrap(), 0x0a000001);
        assert!(dotted_decimal_value("not-an-id").is_err());
    }
}
