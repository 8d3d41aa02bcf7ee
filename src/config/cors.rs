use std::env;

/// Origins allowed to make cross-origin requests, from `ALLOWED_ORIGINS`
/// (comma-separated). Defaults to the Vite local development origins.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::parse(env::var("ALLOWED_ORIGINS").ok())
    }

    fn parse(raw: Option<String>) -> Self {
        let raw = raw.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| {
            "http://localhost:5173,http://127.0.0.1:5173".to_string()
        });
        let allowed_origins = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_yields_local_dev_origins() {
        let config = CorsConfig::parse(None);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
    }

    #[test]
    fn comma_separated_list_is_split_and_trimmed() {
        let config = CorsConfig::parse(Some("http://a.test, http://b.test ,".to_string()));
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn empty_value_falls_back_to_defaults() {
        let config = CorsConfig::parse(Some("  ".to_string()));
        assert_eq!(config.allowed_origins.len(), 2);
    }
}
