// ============================================================================
// APP - JS entry points (wasm32 only)
// ============================================================================
// The UI layer owns one TutorDashboard, calls actions on it and re-renders
// from snapshot()/bucket() when a subscriber fires.
// ============================================================================

use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::CONFIG;
use crate::error::DashboardError;
use crate::models::filter::parse_filter_date;
use crate::models::{DateRange, LessonType};
use crate::services::DataSource;
use crate::state::{DashboardState, SubscriptionId};
use crate::viewmodels::DashboardViewModel;

fn to_js(error: DashboardError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_bound(raw: Option<String>) -> Result<Option<chrono::DateTime<chrono::Utc>>, JsValue> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_filter_date(value).map(Some).map_err(to_js),
    }
}

#[wasm_bindgen]
pub struct TutorDashboard {
    vm: DashboardViewModel<DataSource>,
}

#[wasm_bindgen]
impl TutorDashboard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TutorDashboard {
        let source = DataSource::from_config(&CONFIG);
        TutorDashboard {
            vm: DashboardViewModel::new(DashboardState::new(), source),
        }
    }

    /// Resolves with the user as JSON, rejects with the error message
    pub fn login(&self, email: String, password: String) -> Promise {
        let vm = self.vm.clone();
        future_to_promise(async move {
            let user = vm.login(&email, &password).await.map_err(to_js)?;
            to_json(&user).map(|json| JsValue::from_str(&json))
        })
    }

    /// Clears the tutor and the lesson list
    pub fn logout(&self) {
        self.vm.logout();
    }

    /// Always resolves; failures show up in snapshot().error
    #[wasm_bindgen(js_name = fetchLessons)]
    pub fn fetch_lessons(&self) -> Promise {
        let vm = self.vm.clone();
        future_to_promise(async move {
            vm.fetch_lessons().await;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Rejects with the error message after the claim was rolled back
    #[wasm_bindgen(js_name = takeClass)]
    pub fn take_class(&self, lesson_id: String) -> Promise {
        let vm = self.vm.clone();
        future_to_promise(async move {
            vm.take_class(&lesson_id).await.map_err(to_js)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// 0-11, or null for every month. Clears the date range.
    #[wasm_bindgen(js_name = setSelectedMonth)]
    pub fn set_selected_month(&self, month: Option<u32>) -> Result<(), JsValue> {
        self.vm.set_selected_month(month).map_err(to_js)
    }

    /// Bounds are RFC 3339 or YYYY-MM-DD; empty or missing clears that bound
    #[wasm_bindgen(js_name = setDateRange)]
    pub fn set_date_range(&self, from: Option<String>, to: Option<String>) -> Result<(), JsValue> {
        let range = DateRange::new(parse_bound(from)?, parse_bound(to)?);
        self.vm.set_date_range(range);
        Ok(())
    }

    /// JSON array of the filtered, sorted lessons of one bucket
    pub fn bucket(&self, lesson_type: &str) -> Result<String, JsValue> {
        let lesson_type: LessonType = lesson_type.parse().map_err(to_js)?;
        to_json(&self.vm.bucket(lesson_type))
    }

    /// `{ "historic", "upcoming", "available" }` under the active filter
    #[wasm_bindgen(js_name = bucketCounts)]
    pub fn bucket_counts(&self) -> Result<String, JsValue> {
        to_json(&self.vm.bucket_counts())
    }

    #[wasm_bindgen(js_name = todayLessons)]
    pub fn today_lessons(&self) -> Result<String, JsValue> {
        to_json(&self.vm.today_lessons())
    }

    /// Whole state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.vm.state().snapshot())
    }

    /// `callback` runs after every state change. Returns the id for `unsubscribe`.
    pub fn subscribe(&self, callback: Function) -> u64 {
        self.vm
            .state()
            .subscribe(move || {
                if let Err(e) = callback.call0(&JsValue::NULL) {
                    log::error!("❌ [APP] Subscriber threw: {:?}", e);
                }
            })
            .into()
    }

    /// Drops the callback and its JS function; false if the id is unknown
    pub fn unsubscribe(&self, id: u64) -> bool {
        self.vm.state().unsubscribe(SubscriptionId::from(id))
    }

    /// `{ "title", "description" }` for a bucket with no lessons
    #[wasm_bindgen(js_name = emptyState)]
    pub fn empty_state(&self, lesson_type: &str) -> Result<String, JsValue> {
        let lesson_type: LessonType = lesson_type.parse().map_err(to_js)?;
        let (title, description) = lesson_type.empty_state();
        to_json(&serde_json::json!({ "title": title, "description": description }))
    }
}

impl Default for TutorDashboard {
    fn default() -> Self {
        Self::new()
    }
}
