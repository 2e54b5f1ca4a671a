use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Collection holding course records.
pub const COURSES_COLLECTION: &str = "Courses";

/// Collection holding webinar records.
pub const WEBINARS_COLLECTION: &str = "webinars";

/// Any scalar a schema-less document may hold where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Null,
}

/// Decode a text field from whatever scalar the document holds: numbers and
/// booleans keep their JSON spelling, `null` becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Flag(b) => b.to_string(),
        Scalar::Null => String::new(),
    })
}

/// Decode an RFC 3339 timestamp. Anything else reads as unset.
fn lenient_timestamp<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text.parse().ok(),
        _ => None,
    })
}

/// Course document as persisted in the `Courses` collection.
///
/// Documents are schema-less, so every field tolerates being absent or
/// holding another scalar type, and decodes to its empty value when unusable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub course_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sub_heading: String,
    /// Raw price text exactly as entered.
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Webinar document as persisted in the `webinars` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub meet_link: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// Parse a raw price into an amount. Blank or malformed text yields `None`.
pub fn coerce_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_document_uses_store_field_names() {
        let doc = CourseDocument {
            course_name: "Rust 101".to_string(),
            sub_heading: "Ownership".to_string(),
            price: "499".to_string(),
            created_at: None,
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["courseName"], "Rust 101");
        assert_eq!(json["subHeading"], "Ownership");
        assert_eq!(json["price"], "499");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let doc: CourseDocument = serde_json::from_str(r#"{"price":"10"}"#).unwrap();
        assert_eq!(doc.course_name, "");
        assert_eq!(doc.sub_heading, "");
        assert_eq!(doc.price, "10");
        assert!(doc.created_at.is_none());

        let webinar: WebinarDocument = serde_json::from_str(r#"{"title":"Intro"}"#).unwrap();
        assert_eq!(webinar.title, "Intro");
        assert!(webinar.start_time.is_none());
    }

    #[test]
    fn test_non_text_scalars_decode_as_text() {
        let doc: CourseDocument =
            serde_json::from_str(r#"{"courseName":"Rust","subHeading":null,"price":100}"#).unwrap();
        assert_eq!(doc.course_name, "Rust");
        assert_eq!(doc.sub_heading, "");
        assert_eq!(doc.price, "100");
        assert_eq!(coerce_price(&doc.price), Some(100.0));

        let doc: CourseDocument = serde_json::from_str(r#"{"price":49.5}"#).unwrap();
        assert_eq!(doc.price, "49.5");
    }

    #[test]
    fn test_unreadable_timestamps_decode_as_unset() {
        let webinar: WebinarDocument = serde_json::from_str(
            r#"{"title":"Intro","startTime":"soon","endTime":"2024-03-05T10:15:00+05:30"}"#,
        )
        .unwrap();
        assert!(webinar.start_time.is_none());
        assert_eq!(
            webinar.end_time.map(|t| t.to_rfc3339()).as_deref(),
            Some("2024-03-05T10:15:00+05:30")
        );
    }

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price("100"), Some(100.0));
        assert_eq!(coerce_price(" 49.5 "), Some(49.5));
        assert_eq!(coerce_price(""), None);
        assert_eq!(coerce_price("free"), None);
        assert_eq!(coerce_price("NaN"), None);
    }
}
