//! Serde helpers for `http::Method`, which carries no serde support of its own.

use http::Method;
use serde::de::{Deserialize, Deserializer, Error};

fn parse<E: Error>(token: &str) -> Result<Method, E> {
    Method::from_bytes(token.as_bytes())
        .map_err(|_| E::custom(format!("invalid HTTP method: {token:?}")))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Method, D::Error>
where
    D: Deserializer<'de>,
{
    let token = String::deserialize(deserializer)?;
    parse(&token)
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Method>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(token) => parse(&token).map(Some),
            None => Ok(None),
        }
    }
}

pub fn default_method() -> Method {
    Method::GET
}

#[cfg(test)]
pub mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Endpoint {
        #[serde(deserialize_with = "super::deserialize")]
        method: Method,
        #[serde(default, deserialize_with = "super::option::deserialize")]
        fallback: Option<Method>,
    }

    #[test]
    fn test_known_and_extension_methods() {
        let endpoint: Endpoint = serde_yaml::from_str("method: HEAD\nfallback: PURGE").expect("Invalid YAML");
        assert_eq!(endpoint.method, Method::HEAD);
        assert_eq!(endpoint.fallback.as_ref().map(Method::as_str), Some("PURGE"));
    }

    #[test]
    fn test_missing_optional_method_is_none() {
        let endpoint: Endpoint = serde_yaml::from_str("method: POST").expect("Invalid YAML");
        assert_eq!(endpoint.method, Method::POST);
        assert!(endpoint.fallback.is_none());
    }

    #[test]
    fn test_empty_method_is_rejected() {
        assert!(serde_yaml::from_str::<Endpoint>("method: ''").is_err());
        assert!(serde_yaml::from_str::<Endpoint>("method: 'GE T'").is_err());
    }
}
