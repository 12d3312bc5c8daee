pub mod data_source;
pub mod mock_api;

#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use data_source::{simulate_latency, LessonDataSource};
pub use mock_api::MockApi;

#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{Lesson, User};

/// Backend picked from configuration
#[derive(Clone)]
pub enum DataSource {
    Mock(MockApi),
    #[cfg(target_arch = "wasm32")]
    Http(ApiClient),
}

impl DataSource {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.use_mock_api {
            return DataSource::Mock(MockApi::new(config.mock_latency));
        }
        Self::http(config)
    }

    #[cfg(target_arch = "wasm32")]
    fn http(config: &AppConfig) -> Self {
        log::info!("🌐 [CONFIG] Using backend at {}", config.backend_url());
        DataSource::Http(ApiClient::new(config.backend_url()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn http(config: &AppConfig) -> Self {
        log::warn!("⚠️ [CONFIG] HTTP backend only available in the browser, using mock data");
        DataSource::Mock(MockApi::new(config.mock_latency))
    }
}

impl LessonDataSource for DataSource {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        match self {
            DataSource::Mock(api) => api.authenticate(email, password).await,
            #[cfg(target_arch = "wasm32")]
            DataSource::Http(api) => api.authenticate(email, password).await,
        }
    }

    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        match self {
            DataSource::Mock(api) => api.list_lessons().await,
            #[cfg(target_arch = "wasm32")]
            DataSource::Http(api) => api.list_lessons().await,
        }
    }

    async fn assign_lesson(&self, lesson_id: &str, tutor_name: &str) -> Result<Lesson> {
        match self {
            DataSource::Mock(api) => api.assign_lesson(lesson_id, tutor_name).await,
            #[cfg(target_arch = "wasm32")]
            DataSource::Http(api) => api.assign_lesson(lesson_id, tutor_name).await,
        }
    }
}
