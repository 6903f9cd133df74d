use http::Method;
use serde::Deserialize;
use url::Url;

use super::codes::StatusRange;

/// A single liveness target.
///
/// Contains the URI to probe plus the optional overrides for the HTTP method and
/// accepted status codes, and the custom headers to send.
/// An unset override means the target inherits the group default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// The URI of the endpoint to be probed. Fixed at creation.
    uri: Url,

    /// Method override. `None` inherits the group method.
    #[serde(default, deserialize_with = "super::method::option::deserialize")]
    http_method: Option<Method>,

    /// Accepted status code override. `None` inherits the group range.
    #[serde(default)]
    expected_codes: Option<StatusRange>,

    /// Custom headers in send order. Duplicate names are kept.
    #[serde(default)]
    headers: Vec<(String, String)>,
}

impl TargetConfig {
    pub fn new(uri: Url) -> Self {
        Self {
            uri,
            http_method: None,
            expected_codes: None,
            headers: Vec::new(),
        }
    }

    pub fn use_get(&mut self) -> &mut Self {
        self.use_method(Method::GET)
    }

    pub fn use_post(&mut self) -> &mut Self {
        self.use_method(Method::POST)
    }

    pub fn use_method(&mut self, method: Method) -> &mut Self {
        self.http_method = Some(method);
        self
    }

    pub fn expect_code(&mut self, code: u16) -> &mut Self {
        self.expected_codes = Some(StatusRange::single(code));
        self
    }

    /// Accept any status in `min..=max`. The range is not validated.
    pub fn expect_codes(&mut self, min: u16, max: u16) -> &mut Self {
        self.expected_codes = Some(StatusRange::new(min, max));
        self
    }

    /// Append a header. Earlier headers with the same name are kept.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn http_method(&self) -> Option<&Method> {
        self.http_method.as_ref()
    }

    pub fn expected_codes(&self) -> Option<StatusRange> {
        self.expected_codes
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The method to probe with: the override if set, otherwise `default`.
    pub fn effective_method<'a>(&'a self, default: &'a Method) -> &'a Method {
        self.http_method.as_ref().unwrap_or(default)
    }

    /// The accepted range: the override if set, otherwise `default`.
    pub fn effective_codes(&self, default: StatusRange) -> StatusRange {
        self.expected_codes.unwrap_or(default)
    }
}
