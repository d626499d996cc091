use serde::{Deserialize, Serialize};
use url::Url;

use crate::capabilities::validate_url;
use crate::character::{Normalizer, DEFAULT_PLACEHOLDER_NAME};
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.demonslayer-api.com/api/v1/characters";
/// Largest page the catalog endpoint serves.
pub const DEFAULT_PAGE_LIMIT: u32 = 45;
pub const MAX_PAGE_LIMIT: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub page_limit: u32,
    pub placeholder_name: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            page_limit: DEFAULT_PAGE_LIMIT,
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.base_url)?;

        if self.page_limit == 0 || self.page_limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::InvalidPageLimit {
                value: self.page_limit,
                max: MAX_PAGE_LIMIT,
            });
        }

        Ok(())
    }

    /// `{base}?limit={page_limit}`
    pub fn list_url(&self) -> Url {
        self.with_query("limit", &self.page_limit.to_string())
    }

    /// `{base}?id={id}`
    pub fn detail_url(&self, id: &str) -> Url {
        self.with_query("id", id)
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.placeholder_name.clone())
    }

    fn with_query(&self, key: &str, value: &str) -> Url {
        let mut url = self.base_url.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(key, value);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalog_endpoint() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.page_limit, 45);
        assert_eq!(config.placeholder_name, "Sem nome");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn list_url_carries_limit() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.list_url().as_str(),
            "https://www.demonslayer-api.com/api/v1/characters?limit=45"
        );
    }

    #[test]
    fn detail_url_carries_encoded_id() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.detail_url("12").as_str(),
            "https://www.demonslayer-api.com/api/v1/characters?id=12"
        );
        assert_eq!(
            config.detail_url("a b&c").query(),
            Some("id=a+b%26c")
        );
    }

    #[test]
    fn existing_query_is_preserved_and_key_replaced() {
        let config = CatalogConfig {
            base_url: Url::parse("https://example.com/chars?lang=pt&limit=3").unwrap(),
            page_limit: 10,
            ..CatalogConfig::default()
        };
        assert_eq!(config.list_url().query(), Some("lang=pt&limit=10"));
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = CatalogConfig::from_json(r#"{"page_limit": 5}"#).unwrap();
        assert_eq!(config.page_limit, 5);
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn from_json_rejects_bad_scheme() {
        let result = CatalogConfig::from_json(r#"{"base_url": "ftp://example.com/chars"}"#);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn from_json_rejects_zero_limit() {
        let result = CatalogConfig::from_json(r#"{"page_limit": 0}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPageLimit { value: 0, .. })
        ));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            CatalogConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn normalizer_uses_placeholder() {
        let config = CatalogConfig {
            placeholder_name: "Unnamed".into(),
            ..CatalogConfig::default()
        };
        assert_eq!(config.normalizer().placeholder_name(), "Unnamed");
    }
}
