use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{coerce_price, CourseDocument, WebinarDocument};

// ============================================================================
// Course API Types
// ============================================================================

/// Course creation payload. Fields are stored as entered; empty strings are
/// allowed and fall back to display defaults when rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub sub_heading: String,
    #[serde(default)]
    pub price: String,
}

impl CreateCourseRequest {
    pub fn into_document(self, created_at: DateTime<Utc>) -> CourseDocument {
        CourseDocument {
            course_name: self.course_name,
            sub_heading: self.sub_heading,
            price: self.price,
            created_at: Some(created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub course_name: String,
    pub sub_heading: String,
    /// Raw price text as persisted.
    pub price: String,
    /// `price` coerced to a number, when it parses.
    pub price_amount: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CourseResponse {
    pub fn from_document(id: Uuid, doc: CourseDocument) -> Self {
        Self {
            id,
            price_amount: coerce_price(&doc.price),
            course_name: doc.course_name,
            sub_heading: doc.sub_heading,
            price: doc.price,
            created_at: doc.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCoursesResponse {
    pub courses: Vec<CourseResponse>,
    pub total: usize,
}

// ============================================================================
// Webinar API Types
// ============================================================================

/// Webinar creation payload carrying the raw picker values. The backend
/// composes absolute start/end instants from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateWebinarRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    #[validate(length(min = 1, max = 2048))]
    pub meet_link: String,

    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebinarResponse {
    pub id: Uuid,
    pub title: String,
    pub meet_link: String,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub description: String,
}

impl WebinarResponse {
    pub fn from_document(id: Uuid, doc: WebinarDocument) -> Self {
        Self {
            id,
            title: doc.title,
            meet_link: doc.meet_link,
            start_time: doc.start_time,
            end_time: doc.end_time,
            description: doc.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListWebinarsResponse {
    pub webinars: Vec<WebinarResponse>,
    pub total: usize,
}

// ============================================================================
// Shared Types
// ============================================================================

/// Identifier assigned by the store to a newly added record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webinar_request() -> CreateWebinarRequest {
        CreateWebinarRequest {
            title: "Async Rust".to_string(),
            meet_link: "https://meet.example.com/abc".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
            description: "Futures and executors".to_string(),
        }
    }

    #[test]
    fn test_webinar_request_validation() {
        assert!(webinar_request().validate().is_ok());

        let mut missing_title = webinar_request();
        missing_title.title.clear();
        let errors = missing_title.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_course_response_keeps_raw_price() {
        let doc = CreateCourseRequest {
            course_name: String::new(),
            sub_heading: String::new(),
            price: String::new(),
        }
        .into_document(Utc::now());

        let response = CourseResponse::from_document(Uuid::new_v4(), doc);
        assert_eq!(response.price, "");
        assert_eq!(response.price_amount, None);
        assert!(response.created_at.is_some());
    }

    #[test]
    fn test_error_response_details() {
        let plain = ErrorResponse::new("not_found", "missing");
        assert!(plain.details.is_none());

        let detailed = ErrorResponse::with_details("validation_error", "bad", "title");
        assert_eq!(detailed.details.as_deref(), Some("title"));
    }
}
