//! Validation of book creation payloads.
//!
//! The payload is inspected as raw JSON so that wrong field types can be
//! reported separately from missing fields. Checks run in a fixed order and
//! the first failure wins:
//! 1. `title` / `author` present and non-empty
//! 2. `title` / `author` are strings
//! 3. `year`, when given, is a whole number in `0..=current year`

use chrono::Datelike;
use serde_json::{Map, Value};

use super::NewBook;
use crate::errors::ServiceError;

/// Validate against the current calendar year (UTC).
pub fn validate_new_book(payload: &Value) -> Result<NewBook, ServiceError> {
    validate_new_book_at(payload, chrono::Utc::now().year())
}

/// Validate with an explicit upper bound for `year`.
pub fn validate_new_book_at(payload: &Value, current_year: i32) -> Result<NewBook, ServiceError> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);
    let title = fields.get("title");
    let author = fields.get("author");

    if is_blank(title) || is_blank(author) {
        return Err(ServiceError::MissingField);
    }
    let (Some(Value::String(title)), Some(Value::String(author))) = (title, author) else {
        return Err(ServiceError::InvalidType);
    };
    let year = parse_year(fields.get("year"), current_year)?;

    Ok(NewBook { title: title.trim().to_string(), author: author.trim().to_string(), year })
}

/// Absent, `null`, `false`, `0` and empty or whitespace-only strings.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

fn parse_year(value: Option<&Value>, current_year: i32) -> Result<Option<i32>, ServiceError> {
    let n = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n,
        Some(_) => return Err(ServiceError::InvalidYear),
    };
    let year = match n.as_i64() {
        Some(i) => i,
        // whole floats such as `1965.0`
        None => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => f as i64,
            _ => return Err(ServiceError::InvalidYear),
        },
    };
    if year < 0 || year > i64::from(current_year) {
        return Err(ServiceError::InvalidYear);
    }
    i32::try_from(year).map(Some).map_err(|_| ServiceError::InvalidYear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const YEAR: i32 = 2026;

    fn check(payload: Value) -> Result<NewBook, ServiceError> {
        validate_new_book_at(&payload, YEAR)
    }

    #[test]
    fn trims_fields_and_keeps_year() {
        let nb = check(json!({"title": "  Dune ", "author": "Herbert\n", "year": 1965})).unwrap();
        assert_eq!(nb, NewBook { title: "Dune".into(), author: "Herbert".into(), year: Some(1965) });
    }

    #[test]
    fn absent_or_null_year_is_none() {
        assert_eq!(check(json!({"title": "T", "author": "A"})).unwrap().year, None);
        assert_eq!(check(json!({"title": "T", "author": "A", "year": null})).unwrap().year, None);
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert_eq!(check(json!({"title": "T", "author": "A", "year": 0})).unwrap().year, Some(0));
        assert_eq!(check(json!({"title": "T", "author": "A", "year": YEAR})).unwrap().year, Some(YEAR));
        assert_eq!(check(json!({"title": "T", "author": "A", "year": 1965.0})).unwrap().year, Some(1965));
    }

    #[test]
    fn missing_or_empty_fields() {
        for payload in [
            json!({"author": "A"}),
            json!({"title": "T"}),
            json!({"title": "", "author": "A"}),
            json!({"title": "   ", "author": "A"}),
            json!({"title": "T", "author": null}),
            json!({"title": 0, "author": "A"}),
            json!({"title": false, "author": "A"}),
            json!({}),
            json!([1, 2]),
            json!("text"),
        ] {
            assert!(matches!(check(payload.clone()), Err(ServiceError::MissingField)), "{payload}");
        }
    }

    #[test]
    fn non_string_fields() {
        for payload in [
            json!({"title": 42, "author": "A"}),
            json!({"title": "T", "author": true}),
            json!({"title": ["T"], "author": "A"}),
            json!({"title": "T", "author": {"name": "A"}}),
        ] {
            assert!(matches!(check(payload.clone()), Err(ServiceError::InvalidType)), "{payload}");
        }
    }

    #[test]
    fn invalid_years() {
        for year in [json!(-1), json!(YEAR + 1), json!("1965"), json!(1965.5), json!(true), json!([1965])] {
            let payload = json!({"title": "T", "author": "A", "year": year});
            assert!(matches!(check(payload.clone()), Err(ServiceError::InvalidYear)), "{payload}");
        }
    }

    #[test]
    fn first_failing_check_wins() {
        // missing author beats wrong title type and bad year
        let e = check(json!({"title": 5, "year": "x"})).unwrap_err();
        assert!(matches!(e, ServiceError::MissingField));
        // wrong type beats bad year
        let e = check(json!({"title": 5, "author": "A", "year": -3})).unwrap_err();
        assert!(matches!(e, ServiceError::InvalidType));
    }

    #[test]
    fn system_clock_variant_accepts_this_year() {
        let year = chrono::Utc::now().year();
        let nb = validate_new_book(&json!({"title": "T", "author": "A", "year": year})).unwrap();
        assert_eq!(nb.year, Some(year));
        assert!(validate_new_book(&json!({"title": "T", "author": "A", "year": year + 1})).is_err());
    }
}
