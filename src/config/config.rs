use std::env;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";

/// Credentials and target database for a [`NotionDatabaseClient`].
///
/// Immutable once built. The token is kept in a [`SecretString`] so it never
/// shows up in `Debug` output.
///
/// [`NotionDatabaseClient`]: crate::clients::NotionDatabaseClient
#[derive(Debug)]
pub struct ClientConfig {
    pub api_token: SecretString,
    pub database_id: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            database_id: database_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `NOTION_TOKEN`, `DATABASE_ID` and optionally `NOTION_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary key lookup.
    ///
    /// Empty values are accepted; the Notion API answers them with an
    /// authorization error. Call [`ClientConfig::validate`] to reject them
    /// up front.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("NOTION_TOKEN").ok_or(Error::MissingEnv("NOTION_TOKEN"))?;
        let database_id = lookup("DATABASE_ID").ok_or(Error::MissingEnv("DATABASE_ID"))?;

        let config = Self::new(token, database_id);
        Ok(match lookup("NOTION_BASE_URL") {
            Some(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_token.expose_secret().is_empty() {
            return Err(Error::InvalidConfig("NOTION_TOKEN cannot be empty".to_string()));
        }

        if self.database_id.is_empty() {
            return Err(Error::InvalidConfig("DATABASE_ID cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Headers sent with every request. Derived only from the token.
    pub fn headers(&self) -> Result<HeaderMap> {
        let bearer = format!("Bearer {}", self.api_token.expose_secret());
        let mut auth = HeaderValue::from_str(&bearer).map_err(|source| Error::InvalidHeader {
            name: "Authorization",
            source,
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_static(NOTION_VERSION),
        );
        Ok(headers)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_required_vars() {
        let config =
            ClientConfig::from_lookup(lookup(&[("NOTION_TOKEN", "abc"), ("DATABASE_ID", "db1")]))
                .unwrap();

        assert_eq!(config.api_token.expose_secret(), "abc");
        assert_eq!(config.database_id, "db1");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_override() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("NOTION_TOKEN", "abc"),
            ("DATABASE_ID", "db1"),
            ("NOTION_BASE_URL", "http://localhost:9000/"),
        ]))
        .unwrap();

        assert_eq!(config.url("pages/p1"), "http://localhost:9000/pages/p1");
    }

    #[test]
    fn missing_token_is_reported() {
        let err = ClientConfig::from_lookup(lookup(&[("DATABASE_ID", "db1")])).unwrap_err();
        assert!(matches!(err, Error::MissingEnv("NOTION_TOKEN")));

        let err = ClientConfig::from_lookup(lookup(&[("NOTION_TOKEN", "abc")])).unwrap_err();
        assert!(matches!(err, Error::MissingEnv("DATABASE_ID")));
    }

    #[test]
    fn empty_values_load_but_fail_validation() {
        let config =
            ClientConfig::from_lookup(lookup(&[("NOTION_TOKEN", ""), ("DATABASE_ID", "db1")]))
                .unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = ClientConfig::new("abc", "");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        assert!(ClientConfig::new("abc", "db1").validate().is_ok());
    }

    #[test]
    fn headers_are_derived_from_token() {
        let headers = ClientConfig::new("abc", "db1").headers().unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["notion-version"], "2022-06-28");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let err = ClientConfig::new("abc\n", "db1").headers().unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { name: "Authorization", .. }));
    }

    #[test]
    fn debug_output_hides_token() {
        let config = ClientConfig::new("super-secret", "db1");
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
