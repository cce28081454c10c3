//! HTTP client for the website analyzer backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the admin API is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result` whose `Err` is a display-ready message
//! (the server's `detail` field when present, otherwise a fallback naming
//! the status code), so the login page can render failures without
//! inspecting responses itself.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use serde_json::Value;

/// Local development backend, used when no origin is baked in at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[cfg(any(test, feature = "hydrate"))]
const JSON_CONTENT_TYPE: &str = "application/json";
#[cfg(feature = "hydrate")]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
#[cfg(feature = "hydrate")]
const LOGIN_ENDPOINT: &str = "/auth/login";

/// HTTP method for a generic API request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Caller-supplied knobs for a generic API request.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Extra headers; these win over the defaults on key collision.
    pub headers: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

/// A successful response body: either no content or parsed JSON.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonBody {
    Empty,
    Value(Value),
}

/// Error-response convention: a human-readable message under `detail`.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Pick the display message for a non-success response: the body's `detail`
/// field when it parses, otherwise the given fallback for the status code.
#[cfg(any(test, feature = "hydrate"))]
fn extract_error_message(status: u16, body: &str, fallback: fn(u16) -> String) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Some(detail) }) => detail,
        _ => fallback(status),
    }
}

/// Default headers merged with caller headers; callers win on
/// case-insensitive key collision.
#[cfg(any(test, feature = "hydrate"))]
fn merge_headers(caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = vec![("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned())];
    for (name, value) in caller {
        merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        merged.push((name.clone(), value.clone()));
    }
    merged
}

/// Percent-encode one `application/x-www-form-urlencoded` component:
/// alphanumerics and `*-._` pass through, space becomes `+`.
#[cfg(any(test, feature = "hydrate"))]
fn encode_form_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", encode_form_component(name), encode_form_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// The auth endpoint takes OAuth2 password-form fields, so the email is
/// sent under the `username` key.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> String {
    encode_form(&[("username", email), ("password", password)])
}

/// Classify a success-range body: empty means no content, anything else
/// must parse as JSON.
#[cfg(any(test, feature = "hydrate"))]
fn classify_body(text: &str) -> Result<JsonBody, String> {
    if text.is_empty() {
        return Ok(JsonBody::Empty);
    }
    serde_json::from_str(text)
        .map(JsonBody::Value)
        .map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

/// Thin client over the analyzer backend with a fixed base origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given base origin. Trailing slashes are
    /// trimmed so endpoint joining stays deterministic.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Build a client from the compile-time environment
    /// (`ANALYZER_API_URL`), falling back to the local development server.
    pub fn from_env() -> Self {
        Self::new(option_env!("ANALYZER_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Origin every endpoint path is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Perform one request and hand back `(status, body_text)`. Both public
    /// operations are built on this single primitive so their error
    /// classification cannot drift.
    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        headers: &[(String, String)],
        body: Option<String>,
    ) -> Result<(u16, String), String> {
        let url = self.endpoint_url(endpoint);
        let mut builder = gloo_net::http::RequestBuilder::new(&url).method(gloo_method(method));
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = match body {
            Some(body) => builder.body(body).map_err(|e| e.to_string())?,
            None => builder.build().map_err(|e| e.to_string())?,
        };
        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        let text = response.text().await.map_err(|e| e.to_string())?;
        Ok((status, text))
    }

    /// Issue a JSON API request against the configured origin.
    ///
    /// Resolves to the parsed response body, or [`JsonBody::Empty`] for
    /// no-content responses.
    ///
    /// # Errors
    ///
    /// Returns a display-ready message when the request cannot be sent, the
    /// server responds outside the success range, or a non-empty body is
    /// not valid JSON.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<JsonBody, String> {
        #[cfg(feature = "hydrate")]
        {
            let headers = merge_headers(&options.headers);
            let body = options.body.as_ref().map(Value::to_string);
            let (status, text) = self.send(method, endpoint, &headers, body).await?;
            if !is_success(status) {
                return Err(extract_error_message(status, &text, request_failed_message));
            }
            classify_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, endpoint, options);
            Err("not available on server".to_owned())
        }
    }

    /// Log in with admin credentials via `POST /auth/login`.
    ///
    /// The response is returned as raw JSON; callers decide what to do with
    /// the access token it is expected to carry.
    ///
    /// # Errors
    ///
    /// Returns the server's `detail` message when present, otherwise a
    /// fallback naming the status code.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, String> {
        #[cfg(feature = "hydrate")]
        {
            let headers = vec![("Content-Type".to_owned(), FORM_CONTENT_TYPE.to_owned())];
            let body = login_form_body(email, password);
            let (status, text) = self
                .send(Method::Post, LOGIN_ENDPOINT, &headers, Some(body))
                .await?;
            if !is_success(status) {
                return Err(extract_error_message(status, &text, login_failed_message));
            }
            serde_json::from_str(&text).map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err("not available on server".to_owned())
        }
    }
}
