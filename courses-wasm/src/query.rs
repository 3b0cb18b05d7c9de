use anyhow::anyhow;
use courses_core::config::ClientConfig;
use serde::Deserialize;

/// Client overrides taken from the page URL, e.g.
/// `?api=http://localhost:8088/app&teacher_id=2`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub api: Option<String>,
    pub sign: Option<String>,
    pub teacher_id: Option<i64>,
}

impl PageQuery {
    pub fn parse(search: &str) -> anyhow::Result<Self> {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return Ok(Self::default());
        }
        serde_qs::from_str(query).map_err(|e| anyhow!("Invalid page query `{}`: {}", search, e))
    }

    pub fn apply(self, config: ClientConfig) -> ClientConfig {
        ClientConfig {
            api_url: self.api.unwrap_or(config.api_url),
            sign: self.sign.unwrap_or(config.sign),
            teacher_id: self.teacher_id.unwrap_or(config.teacher_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_keeps_defaults() {
        let config = PageQuery::parse("").unwrap().apply(ClientConfig::default());
        assert_eq!(config, ClientConfig::default());
        assert_eq!(PageQuery::parse("?").unwrap(), PageQuery::default());
    }

    #[test]
    fn test_overrides() {
        let query =
            PageQuery::parse("?api=http%3A%2F%2Flocalhost%3A9000%2Fapp&teacher_id=7&other=1")
                .unwrap();
        let config = query.apply(ClientConfig::default());

        assert_eq!(config.api_url, "http://localhost:9000/app");
        assert_eq!(config.teacher_id, 7);
        assert_eq!(config.sign, "123");
    }

    #[test]
    fn test_invalid_teacher_id() {
        assert!(PageQuery::parse("?teacher_id=seven").is_err());
    }
}
