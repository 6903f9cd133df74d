use http::Method;
use serde::Deserialize;
use url::Url;

use super::codes::StatusRange;
use super::target::TargetConfig;

/// A group of liveness targets sharing a default method and status range.
///
/// Group defaults are never copied into the targets. A target keeps its own
/// overrides and anything it leaves unset is resolved against the group when
/// the configuration is read, see [`GroupConfig::resolved_targets`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Default method for targets without an override. Defaults to GET.
    #[serde(
        default = "super::method::default_method",
        deserialize_with = "super::method::deserialize"
    )]
    http_method: Method,

    /// Default accepted status codes. Defaults to 200-299.
    #[serde(default)]
    expected_codes: StatusRange,

    /// The targets in insertion order. The same URI may appear more than once.
    #[serde(default)]
    targets: Vec<TargetConfig>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupConfig {
    pub fn new() -> Self {
        Self {
            http_method: Method::GET,
            expected_codes: StatusRange::default(),
            targets: Vec::new(),
        }
    }

    pub fn use_get(&mut self) -> &mut Self {
        self.use_method(Method::GET)
    }

    pub fn use_post(&mut self) -> &mut Self {
        self.use_method(Method::POST)
    }

    pub fn use_method(&mut self, method: Method) -> &mut Self {
        self.http_method = method;
        self
    }

    pub fn expect_code(&mut self, code: u16) -> &mut Self {
        self.expected_codes = StatusRange::single(code);
        self
    }

    pub fn expect_codes(&mut self, min: u16, max: u16) -> &mut Self {
        self.expected_codes = StatusRange::new(min, max);
        self
    }

    /// Add a target that inherits every group default.
    pub fn add_target(&mut self, uri: Url) -> &mut Self {
        self.push_target(TargetConfig::new(uri))
    }

    /// Add a target, customising it through `configure` before it is appended.
    pub fn add_target_with<F>(&mut self, uri: Url, configure: F) -> &mut Self
    where
        F: FnOnce(&mut TargetConfig),
    {
        let mut target = TargetConfig::new(uri);
        configure(&mut target);
        self.push_target(target)
    }

    /// Like [`GroupConfig::add_target_with`] for a fallible `configure`.
    ///
    /// An error from `configure` is returned as is and the target is discarded.
    pub fn try_add_target_with<F, E>(&mut self, uri: Url, configure: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut TargetConfig) -> Result<(), E>,
    {
        let mut target = TargetConfig::new(uri);
        configure(&mut target)?;
        Ok(self.push_target(target))
    }

    fn push_target(&mut self, target: TargetConfig) -> &mut Self {
        log::debug!(
            "Added liveness target {} (method: {}, codes: {})",
            target.uri(),
            target.http_method().map_or("inherit", Method::as_str),
            target
                .expected_codes()
                .map_or_else(|| "inherit".to_string(), |codes| codes.to_string()),
        );
        self.targets.push(target);
        self
    }

    pub fn http_method(&self) -> &Method {
        &self.http_method
    }

    pub fn expected_codes(&self) -> StatusRange {
        self.expected_codes
    }

    pub fn targets(&self) -> &[TargetConfig] {
        &self.targets
    }

    /// Iterate the targets with their overrides applied over the group defaults.
    pub fn resolved_targets(&self) -> impl Iterator<Item = ResolvedTarget<'_>> + '_ {
        self.targets.iter().map(move |target| ResolvedTarget {
            uri: target.uri(),
            http_method: target.effective_method(&self.http_method),
            expected_codes: target.effective_codes(self.expected_codes),
            headers: target.headers(),
        })
    }
}

/// A read-only view of a target with the group defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget<'a> {
    pub uri: &'a Url,
    pub http_method: &'a Method,
    pub expected_codes: StatusRange,
    pub headers: &'a [(String, String)],
}

impl ResolvedTarget<'_> {
    /// Whether a received status code counts as healthy for this target.
    pub fn accepts(&self, status: u16) -> bool {
        self.expected_codes.contains(status)
    }
}
