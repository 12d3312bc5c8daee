// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: requests, status mapping, JSON decoding
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::error::{DashboardError, Result};
use crate::models::user::{AssignLessonRequest, LoginRequest};
use crate::models::{Lesson, User};
use crate::services::data_source::LessonDataSource;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn describe_failure(response: Response) -> String {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("HTTP error {}: {}", status, error_text)
    }
}

impl LessonDataSource for ApiClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let url = format!("{}/v1/auth", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Authenticating {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|_| DashboardError::AuthenticationFailed)?
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ [API] Auth request failed: {}", e);
                DashboardError::AuthenticationFailed
            })?;

        if !response.ok() {
            log::warn!("⚠️ [API] {}", Self::describe_failure(response).await);
            return Err(DashboardError::AuthenticationFailed);
        }

        response
            .json::<User>()
            .await
            .map_err(|_| DashboardError::AuthenticationFailed)
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        let url = format!("{}/v1/lessons", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::FetchFailed(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(DashboardError::FetchFailed(Self::describe_failure(response).await));
        }

        let lessons = response
            .json::<Vec<Lesson>>()
            .await
            .map_err(|e| DashboardError::FetchFailed(format!("Parse error: {}", e)))?;

        log::info!("📚 [API] {} lessons received", lessons.len());
        Ok(lessons)
    }

    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson> {
        let url = format!("{}/v1/lessons/{}/assign", self.base_url, lesson_id);
        let request = AssignLessonRequest {
            tutor_name: tutor_name.to_string(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| DashboardError::ClaimFailed(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| DashboardError::ClaimFailed(format!("Network error: {}", e)))?;

        if response.status() == 404 {
            return Err(DashboardError::LessonNotFound(lesson_id.to_string()));
        }

        if !response.ok() {
            return Err(DashboardError::ClaimFailed(Self::describe_failure(response).await));
        }

        response
            .json::<Lesson>()
            .await
            .map_err(|e| DashboardError::ClaimFailed(format!("Parse error: {}", e)))
    }
}
