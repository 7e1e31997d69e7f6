/// AquaGuardian REST API client
///
/// Retrieves a manager's water-quality examinations, the notices already
/// sent and the users following the manager's region. Submits batches of
/// composed alerts through the "send many notices" endpoint.
///
/// Authenticated calls carry the access token in a `token: Bearer <token>`
/// header, which is what the AquaGuardian backend expects.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::ApiConfig;
use crate::model::{AlertPayload, ApiError, ExaminationSample, NoticeRecord, PreferredUser};
use crate::notice::NoticeSink;

pub const EXAMS_OF_USER_PATH: &str = "/api/exams/get-exam-of-user";
pub const NOTIFICATIONS_BY_MANAGER_PATH: &str =
    "/api/notifications/get-all-notifications-by-manager";
pub const SEND_MANY_NOTICE_PATH: &str = "/api/notifications/send-many-notice-to-area";
pub const PREFERRED_USERS_PATH: &str = "/api/users/get-list-favorited-area";

// ============================================================================
// URL Construction
// ============================================================================

/// Joins the configured base URL and an endpoint path, tolerating a trailing
/// slash on the base.
pub fn build_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// URL listing the examinations recorded by `user_id`.
pub fn build_exams_url(base_url: &str, user_id: &str) -> String {
    build_url(base_url, &format!("{}/{}", EXAMS_OF_USER_PATH, user_id))
}

/// URL listing the notices sent by manager `user_id`.
pub fn build_notifications_url(base_url: &str, user_id: &str) -> String {
    build_url(base_url, &format!("{}/{}", NOTIFICATIONS_BY_MANAGER_PATH, user_id))
}

// ============================================================================
// Response Parsing
// ============================================================================

/// Parses a list response. Accepts a bare JSON array or an object wrapping
/// the array in a `data` field; both shapes occur across backend versions.
pub fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))?;

    let items = match json {
        items @ Value::Array(_) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => {
                return Err(ApiError::ParseError(
                    "expected an array or an object with a `data` array".to_string(),
                ));
            }
        },
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::ParseError(format!(
                "unexpected response shape: {}",
                other
            )));
        }
    };

    serde_json::from_value(items).map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Parses an examinations response.
pub fn parse_examinations(body: &str) -> Result<Vec<ExaminationSample>, ApiError> {
    parse_list(body)
}

/// Parses a notifications response.
pub fn parse_notices(body: &str) -> Result<Vec<NoticeRecord>, ApiError> {
    parse_list(body)
}

/// One entry of the preferred-users response; the user sits under `userInfo`.
#[derive(Deserialize)]
struct PreferredEntry {
    #[serde(rename = "userInfo", default)]
    user_info: Option<PreferredUser>,
}

/// Parses the users following a region. Entries without `userInfo` are
/// dropped.
pub fn parse_preferred_users(body: &str) -> Result<Vec<PreferredUser>, ApiError> {
    let entries: Vec<PreferredEntry> = parse_list(body)?;
    Ok(entries.into_iter().filter_map(|e| e.user_info).collect())
}

/// JavaScript-style truthiness of an acknowledgement body.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interprets the body of a "send many notices" response. An empty body is
/// falsy; a non-JSON body counts as truthy when non-empty.
pub fn parse_send_response(body: &str) -> bool {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return false;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => is_truthy(&value),
        Err(_) => true,
    }
}

// ============================================================================
// API Client
// ============================================================================

pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// Builds a client for the configured API.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.access_token {
            Some(token) => request.header("token", format!("Bearer {}", token)),
            None => request,
        }
    }

    fn get_text(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .authorize(self.http.get(url))
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::HttpError(response.status().as_u16()));
        }

        response.text().map_err(|e| ApiError::Transport(e.to_string()))
    }

    fn post_text<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let response = self
            .authorize(self.http.post(url))
            .json(body)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::HttpError(response.status().as_u16()));
        }

        response.text().map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Fetch all examinations recorded by `user_id`
    pub fn fetch_examinations_of_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<ExaminationSample>, ApiError> {
        let body = self.get_text(&build_exams_url(&self.base_url, user_id))?;
        parse_examinations(&body)
    }

    /// Fetch all notices previously sent by manager `user_id`
    pub fn fetch_notifications_by_manager(
        &self,
        user_id: &str,
    ) -> Result<Vec<NoticeRecord>, ApiError> {
        let body = self.get_text(&build_notifications_url(&self.base_url, user_id))?;
        parse_notices(&body)
    }

    /// Submit a batch of notices in one request
    ///
    /// Returns `Ok(false)` when the server answers 2xx with a falsy body.
    pub fn send_many_notices(&self, payloads: &[AlertPayload]) -> Result<bool, ApiError> {
        let url = build_url(&self.base_url, SEND_MANY_NOTICE_PATH);
        let body = self.post_text(&url, payloads)?;
        Ok(parse_send_response(&body))
    }

    /// Fetch the stakeholders following region `region_id`
    pub fn fetch_preferred_users(&self, region_id: &str) -> Result<Vec<PreferredUser>, ApiError> {
        let url = build_url(&self.base_url, PREFERRED_USERS_PATH);
        let body = self.post_text(&url, &json!({ "regionId": region_id }))?;
        parse_preferred_users(&body)
    }
}

impl NoticeSink for ApiClient {
    fn send_many(&self, payloads: &[AlertPayload]) -> Result<bool, ApiError> {
        self.send_many_notices(payloads)
    }
}

// ============================================================================
// Tests
// ============================================================================
