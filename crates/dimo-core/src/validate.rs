//! Argument checks run before any request is issued.
//!
//! Every failure names the offending parameter.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::endpoint::{CONTENT_TYPE, FORM_URLENCODED};
use crate::error::{CoreError, CoreResult};

/// String argument must contain something other than whitespace
pub fn non_empty(param: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid(param, "must be a non-empty string"));
    }
    Ok(())
}

/// Optional string argument must be non-empty when present
pub fn optional_non_empty(param: &str, value: Option<&str>) -> CoreResult<()> {
    match value {
        Some(v) => non_empty(param, v),
        None => Ok(()),
    }
}

/// JSON argument must be an object (a dict, not a scalar or list)
pub fn json_object(param: &str, value: &Value) -> CoreResult<()> {
    if !value.is_object() {
        return Err(CoreError::invalid(
            param,
            format!("must be a JSON object, got {}", json_type_name(value)),
        ));
    }
    Ok(())
}

/// List argument must have at least one element
pub fn non_empty_list<T>(param: &str, values: &[T]) -> CoreResult<()> {
    if values.is_empty() {
        return Err(CoreError::invalid(
            param,
            "must be provided as a non-empty list, e.g. [1, 3, 4]",
        ));
    }
    Ok(())
}

/// The one header map accepted by the form-encoded auth steps
pub fn form_headers() -> BTreeMap<String, String> {
    BTreeMap::from([(CONTENT_TYPE.to_string(), FORM_URLENCODED.to_string())])
}

/// Header map must be exactly `{"Content-Type": "application/x-www-form-urlencoded"}`.
///
/// Key case, extra headers and alternative values are all rejected; nothing
/// is coerced.
pub fn exact_form_headers(headers: &BTreeMap<String, String>) -> CoreResult<()> {
    if *headers != form_headers() {
        return Err(CoreError::FormHeaders(format!("{:?}", headers)));
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn empty_strings_rejected() {
        assert!(non_empty("token_id", "42").is_ok());
        let err = non_empty("token_id", "  ").unwrap_err();
        assert!(err.to_string().contains("token_id"));
        assert!(optional_non_empty("address", None).is_ok());
        assert!(optional_non_empty("address", Some("")).is_err());
    }

    #[test]
    fn json_objects_only() {
        assert!(json_object("claim_request", &json!({"a": 1})).is_ok());
        let err = json_object("claim_request", &json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument `claim_request`: must be a JSON object, got array"
        );
    }

    #[test]
    fn privileges_list() {
        assert!(non_empty_list("privileges", &[1u32, 3]).is_ok());
        assert!(non_empty_list::<u32>("privileges", &[]).is_err());
    }

    #[test]
    fn exact_form_headers_accepted() {
        assert!(exact_form_headers(&form_headers()).is_ok());
    }

    #[rstest]
    #[case(&[])]
    #[case(&[("content-type", "application/x-www-form-urlencoded")])]
    #[case(&[("Content-Type", "application/json")])]
    #[case(&[("Content-Type", "application/x-www-form-urlencoded; charset=utf-8")])]
    #[case(&[("Content-Type", "application/x-www-form-urlencoded"), ("Accept", "*/*")])]
    fn other_header_maps_rejected(#[case] pairs: &[(&str, &str)]) {
        let headers: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let err = exact_form_headers(&headers).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }
}
