//! Client-side access to the record API.
//!
//! Screens talk to the backend through [`RecordApi`] so they can be driven by
//! the browser HTTP client in production and by in-memory doubles in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::{
    CreateCourseRequest, CreateWebinarRequest, CreatedResponse, ErrorResponse,
    ListCoursesResponse, ListWebinarsResponse,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success status with the server's error body, when it sent one.
    #[error("HTTP error {status}")]
    Status {
        status: u16,
        body: Option<ErrorResponse>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Operations the admin screens need from the record API.
#[async_trait(?Send)]
pub trait RecordApi {
    async fn list_courses(&self) -> Result<ListCoursesResponse, ClientError>;

    async fn create_course(
        &self,
        request: CreateCourseRequest,
    ) -> Result<CreatedResponse, ClientError>;

    async fn list_webinars(&self) -> Result<ListWebinarsResponse, ClientError>;

    async fn create_webinar(
        &self,
        request: CreateWebinarRequest,
    ) -> Result<CreatedResponse, ClientError>;
}
