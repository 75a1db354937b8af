//! Payload types carried by data items and labels.

use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{LabelError, Result};

/// Payload of a `Datum` or `Label`.
///
/// Serialized adjacently tagged so the concrete variant survives a round
/// trip through the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Integer(i64),
    /// Must be finite; NaN and infinities fail to serialize
    Float(#[serde(serialize_with = "serialize_finite")] f64),
    Text(String),
    /// One choice out of a fixed set, e.g. `big_pupper`
    Category(String),
    Image(DogImage),
    Structured(serde_json::Value),
}

impl Value {
    /// The image reference, if this value holds one
    pub fn as_image(&self) -> Option<&DogImage> {
        match self {
            Value::Image(dog) => Some(dog),
            _ => None,
        }
    }
}

// JSON has no NaN or infinity and serde_json would write them as `null`
fn serialize_finite<S: Serializer>(x: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if x.is_finite() {
        serializer.serialize_f64(*x)
    } else {
        Err(serde::ser::Error::custom(format!("non-finite float {} cannot be stored", x)))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) | Value::Category(s) => f.write_str(s),
            Value::Image(dog) => f.write_str(dog.message.as_str()),
            Value::Structured(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DogImage> for Value {
    fn from(dog: DogImage) -> Self {
        Value::Image(dog)
    }
}

/// A dog image as returned by the dog.ceo API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogImage {
    /// Image URL
    pub message: ImageUrl,
}

/// An http(s) URL, validated on construction and on deserialization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Parse and validate a URL
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|e| LabelError::InvalidUrl(format!("{}: {}", raw, e)))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(Self(url.to_string())),
            _ => Err(LabelError::InvalidUrl(format!("{}: expected an http(s) URL", raw))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = LabelError;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> Self {
        url.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOG_URL: &str = "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg";

    #[test]
    fn test_image_url_accepts_https() {
        let url = ImageUrl::parse(DOG_URL).unwrap();
        assert_eq!(url.as_str(), DOG_URL);
    }

    #[test]
    fn test_image_url_rejects_garbage() {
        assert!(matches!(ImageUrl::parse("not a url"), Err(LabelError::InvalidUrl(_))));
    }

    #[test]
    fn test_image_url_rejects_other_schemes() {
        assert!(ImageUrl::parse("ftp://example.org/dog.jpg").is_err());
        assert!(ImageUrl::parse("file:///tmp/dog.jpg").is_err());
    }

    #[test]
    fn test_dog_image_deserialize_validates_url() {
        let err = serde_json::from_value::<DogImage>(json!({"message": "Breed not found"}));
        assert!(err.is_err());

        let dog: DogImage = serde_json::from_value(json!({"message": DOG_URL})).unwrap();
        assert_eq!(dog.message.as_str(), DOG_URL);
    }

    #[test]
    fn test_value_keeps_variant_through_json() {
        let dog = DogImage {
            message: ImageUrl::parse(DOG_URL).unwrap(),
        };
        let value = Value::Image(dog.clone());
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, json!({"kind": "image", "value": {"message": DOG_URL}}));

        let restored: Value = serde_json::from_value(json).unwrap();
        assert_eq!(restored.as_image(), Some(&dog));
    }

    #[test]
    fn test_category_and_text_are_distinct() {
        let category: Value = serde_json::from_value(json!({"kind": "category", "value": "big_pupper"})).unwrap();
        assert_eq!(category, Value::Category("big_pupper".to_string()));
        assert_ne!(category, Value::Text("big_pupper".to_string()));
    }

    #[test]
    fn test_finite_float_round_trips() {
        let json = serde_json::to_value(Value::Float(2.5)).unwrap();
        assert_eq!(json, json!({"kind": "float", "value": 2.5}));
        assert_eq!(serde_json::from_value::<Value>(json).unwrap(), Value::Float(2.5));
    }

    #[test]
    fn test_non_finite_float_fails_to_serialize() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(serde_json::to_string(&Value::Float(x)).is_err(), "{} should not serialize", x);
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Category("small_doggo".to_string()).to_string(), "small_doggo");
        assert_eq!(Value::Structured(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }
}
