use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::api::{
    CreateCourseRequest, CreateWebinarRequest, CreatedResponse, ErrorResponse,
    ListCoursesResponse, ListWebinarsResponse,
};
use shared::client::{ClientError, RecordApi};

const API_BASE_URL: &str = "/api";

/// HTTP client for the backend record API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    base_url: String,
}

impl Default for ApiService {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }
}

impl ApiService {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ClientError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        if !response.ok() {
            let status = response.status();
            let body = response.json::<ErrorResponse>().await.ok();
            return Err(ClientError::Status { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RecordApi for ApiService {
    async fn list_courses(&self) -> Result<ListCoursesResponse, ClientError> {
        self.get_json("/courses").await
    }

    async fn create_course(
        &self,
        request: CreateCourseRequest,
    ) -> Result<CreatedResponse, ClientError> {
        self.post_json("/courses", &request).await
    }

    async fn list_webinars(&self) -> Result<ListWebinarsResponse, ClientError> {
        self.get_json("/webinars").await
    }

    async fn create_webinar(
        &self,
        request: CreateWebinarRequest,
    ) -> Result<CreatedResponse, ClientError> {
        self.post_json("/webinars", &request).await
    }
}
