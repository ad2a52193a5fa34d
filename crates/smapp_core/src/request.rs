//! Outgoing request description
//!
//! Service clients describe what to send with an [`ApiRequest`]; the
//! [`ServiceClient`](crate::ServiceClient) pipeline adds authentication,
//! custom headers and the user agent before sending it.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;

use crate::error::SmappError;

/// Method, URL, query, headers and body of one service call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) custom_headers: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Start a request with the given method
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            custom_headers: Vec::new(),
            body: None,
        }
    }

    /// Start a GET request
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Start a POST request
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Set a query parameter, replacing any earlier value with the same name
    #[must_use]
    pub fn query(mut self, name: &str, value: impl Into<String>) -> Self {
        set_pair(&mut self.query, name, value.into());
        self
    }

    /// Set a query parameter only when a value is present
    #[must_use]
    pub fn query_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value.to_string()),
            None => self,
        }
    }

    /// JSON-encode `value` into a single query parameter
    pub fn json_query<T: Serialize + ?Sized>(
        self,
        name: &str,
        value: &T,
    ) -> Result<Self, SmappError> {
        let encoded =
            serde_json::to_string(value).map_err(|e| SmappError::Serialization(e.to_string()))?;
        Ok(self.query(name, encoded))
    }

    /// JSON-encode `value` as the request body
    pub fn json_body<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, SmappError> {
        let encoded =
            serde_json::to_vec(value).map_err(|e| SmappError::Serialization(e.to_string()))?;
        set_pair(
            &mut self.headers,
            "Content-Type",
            "application/json".to_string(),
        );
        self.body = Some(encoded);
        Ok(self)
    }

    /// Set a service-level header; authentication is applied after it
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        set_pair(&mut self.headers, name, value.into());
        self
    }

    /// Caller-supplied headers; applied after authentication
    #[must_use]
    pub fn custom_headers(mut self, headers: &HashMap<String, String>) -> Self {
        for (name, value) in headers {
            set_pair(&mut self.custom_headers, name, value.clone());
        }
        self
    }

    /// HTTP method
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL without the query string
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value of a query parameter
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        find_pair(&self.query, name)
    }

    /// Value of a service-level or custom header
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_pair(&self.custom_headers, name).or_else(|| find_pair(&self.headers, name))
    }

    /// Encoded body, if any
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    pairs.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
    pairs.push((name.to_string(), value));
}

fn find_pair<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
