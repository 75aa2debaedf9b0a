//! Query-string validation and coercion helpers.
//!
//! These functions never look at a raw request. The HTTP layer hands them
//! anything implementing [`QueryParams`] and gets back typed values or an
//! [`AppError`] naming the offending key.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::constants::{VALID_STADIUM_CODES, VALID_WEEK_COUNTS};
use crate::error::AppError;

/// Key/value access to an incoming query string.
pub trait QueryParams {
    /// Returns the raw value for `key`, or `None` if the key is absent.
    fn get_query(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> QueryParams for HashMap<String, String, S> {
    fn get_query(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl QueryParams for BTreeMap<String, String> {
    fn get_query(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn get_query(&self, key: &str) -> Option<&str> {
        (**self).get_query(key)
    }
}

/// Week counts supported by the history endpoints: 3, 5, 10, 15 or 20.
pub fn is_valid_weeks(weeks: i64) -> bool {
    VALID_WEEK_COUNTS.contains(&weeks)
}

/// Stadium codes: 1 or 2.
pub fn is_valid_stadium(stadium: i64) -> bool {
    VALID_STADIUM_CODES.contains(&stadium)
}

fn parse_bool_literal(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Reads a boolean parameter.
///
/// Absent keys yield `default`. Present values must be one of
/// `1 t T TRUE true True` or `0 f F FALSE false False`.
pub fn query_bool<Q: QueryParams + ?Sized>(
    params: &Q,
    key: &str,
    default: bool,
) -> Result<bool, AppError> {
    let Some(value) = params.get_query(key) else {
        return Ok(default);
    };
    parse_bool_literal(value).ok_or_else(|| AppError::invalid_bool(key, value))
}

/// Reads a comma-separated list of integers.
///
/// The tokens are returned as the original strings, in input order. Every
/// token has to parse as an integer; an empty token is rejected.
pub fn query_int_list<Q: QueryParams + ?Sized>(
    params: &Q,
    key: &str,
    default: Vec<String>,
) -> Result<Vec<String>, AppError> {
    let Some(value) = params.get_query(key) else {
        return Ok(default);
    };

    value
        .split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .map(|_| token.to_string())
                .map_err(|_| AppError::invalid_int_list(key, token))
        })
        .collect()
}

/// Reads an integer parameter, optionally checking it against `validator`.
///
/// The default is returned as-is when the key is absent; the validator only
/// ever sees values that were present and parsed.
pub fn query_int<Q: QueryParams + ?Sized>(
    params: &Q,
    key: &str,
    default: i64,
    validator: Option<fn(i64) -> bool>,
) -> Result<i64, AppError> {
    let Some(value) = params.get_query(key) else {
        return Ok(default);
    };

    let parsed = value
        .parse::<i64>()
        .map_err(|_| AppError::invalid_int(key, value))?;

    match validator {
        Some(is_valid) if !is_valid(parsed) => Err(AppError::out_of_domain(key, parsed)),
        _ => Ok(parsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_is_valid_weeks() {
        for weeks in [3, 5, 10, 15, 20] {
            assert!(is_valid_weeks(weeks), "{weeks} should be valid");
        }
        for weeks in [-3, 0, 1, 4, 6, 11, 21, 100, i64::MAX] {
            assert!(!is_valid_weeks(weeks), "{weeks} should be invalid");
        }
    }

    #[test]
    fn test_is_valid_stadium() {
        assert!(is_valid_stadium(1));
        assert!(is_valid_stadium(2));
        for stadium in [-1, 0, 3, 10] {
            assert!(!is_valid_stadium(stadium));
        }
    }

    #[test]
    fn test_query_bool_absent_returns_default() {
        let empty = params(&[]);
        assert!(query_bool(&empty, "finished", true).unwrap());
        assert!(!query_bool(&empty, "finished", false).unwrap());
    }

    #[test]
    fn test_query_bool_literals() {
        for literal in ["1", "t", "T", "TRUE", "true", "True"] {
            let p = params(&[("finished", literal)]);
            assert!(query_bool(&p, "finished", false).unwrap(), "{literal}");
        }
        for literal in ["0", "f", "F", "FALSE", "false", "False"] {
            let p = params(&[("finished", literal)]);
            assert!(!query_bool(&p, "finished", true).unwrap(), "{literal}");
        }
    }

    #[test]
    fn test_query_bool_rejects_other_values() {
        for literal in ["yes", "tRuE", "", " true", "2"] {
            let p = params(&[("finished", literal)]);
            let err = query_bool(&p, "finished", true).unwrap_err();
            assert!(matches!(err, AppError::InvalidBool { .. }));
            assert_eq!(err.parameter_key(), Some("finished"));
        }
    }

    #[test]
    fn test_query_int_list_preserves_tokens_and_order() {
        let p = params(&[("ids", "3,7,9")]);
        let ids = query_int_list(&p, "ids", vec![]).unwrap();
        assert_eq!(ids, vec!["3", "7", "9"]);

        let p = params(&[("ids", "+5,-2,007")]);
        let ids = query_int_list(&p, "ids", vec![]).unwrap();
        assert_eq!(ids, vec!["+5", "-2", "007"]);
    }

    #[test]
    fn test_query_int_list_absent_returns_default() {
        let p = params(&[("other", "1")]);
        let default = vec!["42".to_string()];
        assert_eq!(query_int_list(&p, "ids", default.clone()).unwrap(), default);
    }

    #[test]
    fn test_query_int_list_names_key_and_token() {
        let p = params(&[("ids", "3,x,9")]);
        let err = query_int_list(&p, "ids", vec![]).unwrap_err();
        match &err {
            AppError::InvalidIntList { key, token } => {
                assert_eq!(key, "ids");
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("ids"));
    }

    #[test]
    fn test_query_int_list_rejects_empty_and_padded_tokens() {
        for raw in ["", "1,,2", "1, 2", "1,"] {
            let p = params(&[("ids", raw)]);
            assert!(query_int_list(&p, "ids", vec![]).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_query_int_absent_skips_validation() {
        let empty = params(&[]);
        // The default is outside the domain but is still returned unchanged.
        assert_eq!(query_int(&empty, "weeks", 4, Some(is_valid_weeks)).unwrap(), 4);
    }

    #[test]
    fn test_query_int_parses_and_validates() {
        let p = params(&[("weeks", "10")]);
        assert_eq!(query_int(&p, "weeks", 5, Some(is_valid_weeks)).unwrap(), 10);

        let p = params(&[("count", "-17")]);
        assert_eq!(query_int(&p, "count", 0, None).unwrap(), -17);
    }

    #[test]
    fn test_query_int_parse_error_names_key() {
        let p = params(&[("weeks", "ten")]);
        let err = query_int(&p, "weeks", 5, Some(is_valid_weeks)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInt { .. }));
        assert_eq!(err.parameter_key(), Some("weeks"));
    }

    #[test]
    fn test_query_int_domain_error() {
        let p = params(&[("stadium", "3")]);
        let err = query_int(&p, "stadium", 1, Some(is_valid_stadium)).unwrap_err();
        match err {
            AppError::OutOfDomain { key, value } => {
                assert_eq!(key, "stadium");
                assert_eq!(value, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_btreemap_accessor() {
        let mut p = BTreeMap::new();
        p.insert("stadium".to_string(), "2".to_string());
        assert_eq!(query_int(&p, "stadium", 1, Some(is_valid_stadium)).unwrap(), 2);
    }
}
