//! reqwest implementation of [`Backend`].

use interests::normalize::{
    extract_error_message, normalize_interests, normalize_status, normalize_user,
};
use interests::{Backend, BackendError, Interest, InterestStatus, UserInfo};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

const CURRENT_USER_PATH: &str = "auth/me";
const CATALOG_PATH: &str = "interests";
const STATUS_PATH: &str = "user-interests/check";
const MY_INTERESTS_PATH: &str = "user-interests";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InterestIdsBody<'a> {
    interest_ids: &'a [String],
}

/// HTTP client for the BITSA REST backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request and return the decoded body of a 2xx response.
    async fn send(&self, req: RequestBuilder) -> Result<Value, BackendError> {
        let resp = req
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let body = parse_body(&text);

        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!(status = status.as_u16(), %body, "Backend rejected request");
            Err(rejection(status, &body))
        }
    }

    async fn get(&self, path: &str) -> Result<Value, BackendError> {
        tracing::debug!(path, "GET");
        self.send(self.request(Method::GET, path)).await
    }

    async fn write_ids(
        &self,
        method: Method,
        interest_ids: &[String],
    ) -> Result<(), BackendError> {
        tracing::debug!(%method, count = interest_ids.len(), "Writing interests");
        let req = self
            .request(method, MY_INTERESTS_PATH)
            .json(&InterestIdsBody { interest_ids });
        self.send(req).await.map(|_| ())
    }
}

impl Backend for HttpBackend {
    async fn current_user(&self) -> Result<Option<UserInfo>, BackendError> {
        match self.get(CURRENT_USER_PATH).await {
            Ok(body) => Ok(normalize_user(&body)),
            Err(BackendError::Rejected { status: 401, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn interests_catalog(&self) -> Result<Vec<Interest>, BackendError> {
        let body = self.get(CATALOG_PATH).await?;
        Ok(normalize_interests(&body))
    }

    async fn my_interests_status(&self) -> Result<InterestStatus, BackendError> {
        let body = self.get(STATUS_PATH).await?;
        normalize_status(&body)
            .ok_or_else(|| BackendError::Decode("status response has no hasInterests".to_string()))
    }

    async fn my_interests(&self) -> Result<Vec<Interest>, BackendError> {
        let body = self.get(MY_INTERESTS_PATH).await?;
        Ok(normalize_interests(&body))
    }

    async fn add_my_interests(&self, interest_ids: &[String]) -> Result<(), BackendError> {
        self.write_ids(Method::POST, interest_ids).await
    }

    async fn replace_my_interests(&self, interest_ids: &[String]) -> Result<(), BackendError> {
        self.write_ids(Method::PUT, interest_ids).await
    }

    async fn remove_my_interest(&self, interest_id: &str) -> Result<(), BackendError> {
        let path = format!("{MY_INTERESTS_PATH}/{}", urlencoding::encode(interest_id));
        tracing::debug!(path = %path, "DELETE");
        self.send(self.request(Method::DELETE, &path)).await.map(|_| ())
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Empty bodies become `null`; non-JSON text is kept as a string.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn rejection(status: StatusCode, body: &Value) -> BackendError {
    BackendError::Rejected {
        status: status.as_u16(),
        message: extract_error_message(body),
    }
}
