//! Declarative configuration of HTTP liveness targets.
//!
//! A [`GroupConfig`] holds the default method and accepted status codes for a set of
//! [`TargetConfig`]s. Each target stores only what it explicitly overrides, so a prober
//! reading the configuration can tell an override apart from an inherited default.
//!
//! ```
//! use uri_liveness::prelude::*;
//!
//! let mut group = GroupConfig::new();
//! group
//!     .use_post()
//!     .expect_codes(200, 204)
//!     .add_target_with(Url::parse("https://svc/health").unwrap(), |cfg| {
//!         cfg.use_get().expect_code(200).add_header("Authorization", "Bearer t");
//!     });
//!
//! let target = &group.targets()[0];
//! assert_eq!(target.http_method(), Some(&Method::GET));
//! assert_eq!(target.expected_codes(), Some(StatusRange::single(200)));
//! ```

pub mod config;
pub mod error;

pub use config::Config;
pub use config::codes::StatusRange;
pub use config::group::{GroupConfig, ResolvedTarget};
pub use config::target::TargetConfig;
pub use error::ConfigError;

pub mod prelude {
    pub use crate::config::codes::StatusRange;
    pub use crate::config::group::{GroupConfig, ResolvedTarget};
    pub use crate::config::target::TargetConfig;
    pub use http::Method;
    pub use url::Url;
}
