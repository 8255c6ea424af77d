use serde::{Deserialize, Deserializer};

/// Deserializes a field that must distinguish "absent" from "explicitly null".
///
/// Use together with `#[serde(default, deserialize_with = "double_option")]`
/// on an `Option<Option<T>>` field: an absent key stays `None`, an explicit
/// `null` becomes `Some(None)`, and a value becomes `Some(Some(value))`.
/// Partial-update handlers rely on this to let a client clear a field.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "double_option")]
        bio: Option<Option<String>>,
    }

    #[test]
    fn test_absent_field_is_none() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.bio.is_none());
    }

    #[test]
    fn test_explicit_null_is_some_none() {
        let payload: Payload = serde_json::from_str(r#"{"bio":null}"#).unwrap();
        assert_eq!(payload.bio, Some(None));
    }

    #[test]
    fn test_value_is_some_some() {
        let payload: Payload = serde_json::from_str(r#"{"bio":"hello"}"#).unwrap();
        assert_eq!(payload.bio, Some(Some("hello".to_string())));
    }
}
