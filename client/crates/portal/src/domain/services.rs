//! Domain Services - Payload validation
//!
//! Pure functions that locate and check the list or record inside a
//! response body before anything reaches a cache.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PayloadError;

/// Where a collection's list lives in a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListShape {
    /// Members tried in order; the first truthy one wins
    pub keys: &'static [&'static str],
    /// No truthy member means an empty list instead of the raw body
    pub missing_is_empty: bool,
}

impl ListShape {
    /// `data`, else the raw body
    pub const DATA: ListShape = ListShape {
        keys: &["data"],
        missing_is_empty: false,
    };

    /// `data`, else empty
    pub const DATA_OR_EMPTY: ListShape = ListShape {
        keys: &["data"],
        missing_is_empty: true,
    };

    /// `data`, then `schemes`, else the raw body
    pub const SCHEMES: ListShape = ListShape {
        keys: &["data", "schemes"],
        missing_is_empty: false,
    };
}

/// Truthiness as the backend's JSON producers use it
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An object with a `then` member is a serialized, unresolved async value
pub fn looks_unresolved(value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.contains_key("then"))
}

/// Locate and validate the list in a list response
pub fn extract_list(body: &Value, shape: ListShape) -> Result<Vec<Value>, PayloadError> {
    let located = shape
        .keys
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|value| is_truthy(value));

    let candidate = match located {
        Some(value) => value,
        None if shape.missing_is_empty => return Ok(Vec::new()),
        None => body,
    };

    if looks_unresolved(candidate) {
        return Err(PayloadError::UnresolvedAsync);
    }

    match candidate {
        Value::Array(items) => Ok(items.clone()),
        Value::Object(map) => match map.get("items") {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Err(PayloadError::InvalidFormat),
        },
        _ => Err(PayloadError::InvalidFormat),
    }
}

/// Locate and validate the record in a single-record response
///
/// `data` when present and non-null, else the raw body. Must be an object.
pub fn extract_item(body: &Value) -> Result<&Value, PayloadError> {
    let candidate = match body.get("data") {
        Some(data) if !data.is_null() => data,
        _ => body,
    };

    if looks_unresolved(candidate) {
        return Err(PayloadError::UnresolvedAsync);
    }
    if !candidate.is_object() {
        return Err(PayloadError::InvalidFormat);
    }
    Ok(candidate)
}

pub fn decode_list<R: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<R>, PayloadError> {
    Ok(serde_json::from_value(Value::Array(items))?)
}

pub fn decode_item<R: DeserializeOwned>(item: &Value) -> Result<R, PayloadError> {
    Ok(R::deserialize(item)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_under_data() {
        let body = json!({"success": true, "data": [{"_id": "1"}, {"_id": "2"}]});
        assert_eq!(extract_list(&body, ListShape::DATA).unwrap().len(), 2);
    }

    #[test]
    fn test_list_items_wrapper() {
        let body = json!({"data": {"items": [{"_id": "1"}], "total": 1}});
        assert_eq!(extract_list(&body, ListShape::DATA).unwrap(), vec![json!({"_id": "1"})]);
    }

    #[test]
    fn test_schemes_alternate_key_and_raw_body() {
        let body = json!({"schemes": [{"_id": "s1"}]});
        assert_eq!(extract_list(&body, ListShape::SCHEMES).unwrap().len(), 1);

        let body = json!([{"_id": "s1"}, {"_id": "s2"}]);
        assert_eq!(extract_list(&body, ListShape::SCHEMES).unwrap().len(), 2);

        // Empty `data` array is truthy and wins over `schemes`.
        let body = json!({"data": [], "schemes": [{"_id": "s1"}]});
        assert!(extract_list(&body, ListShape::SCHEMES).unwrap().is_empty());
    }

    #[test]
    fn test_unresolved_async_is_rejected() {
        let body = json!({"data": {"then": {}, "catch": {}}});
        assert_eq!(
            extract_list(&body, ListShape::SCHEMES),
            Err(PayloadError::UnresolvedAsync)
        );
        assert_eq!(extract_item(&body), Err(PayloadError::UnresolvedAsync));
    }

    #[test]
    fn test_invalid_formats() {
        for body in [
            json!({"success": true}),
            json!({"data": {"total": 3}}),
            json!({"data": {"items": "nope"}}),
            json!("just text"),
            json!(null),
        ] {
            assert_eq!(
                extract_list(&body, ListShape::DATA),
                Err(PayloadError::InvalidFormat),
                "{body}"
            );
        }
    }

    #[test]
    fn test_missing_data_can_mean_empty() {
        let body = json!({"success": true, "data": null});
        assert!(extract_list(&body, ListShape::DATA_OR_EMPTY).unwrap().is_empty());
        assert_eq!(
            extract_list(&body, ListShape::DATA),
            Err(PayloadError::InvalidFormat)
        );
    }

    #[test]
    fn test_item_extraction() {
        let body = json!({"success": true, "data": {"_id": "101", "name": "A"}});
        assert_eq!(extract_item(&body).unwrap()["_id"], "101");

        let bare = json!({"_id": "7", "title": "Merit"});
        assert_eq!(extract_item(&bare).unwrap()["_id"], "7");

        let listy = json!({"data": [1, 2]});
        assert_eq!(extract_item(&listy), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn test_decode_errors_carry_detail() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Row {
            #[serde(rename = "_id")]
            id: String,
        }
        let err = decode_list::<Row>(vec![json!({"name": "no id"})]).unwrap_err();
        assert!(matches!(err, PayloadError::Decode(detail) if detail.contains("_id")));
    }
}
