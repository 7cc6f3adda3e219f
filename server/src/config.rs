use anyhow::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub cors_allowed_origins: Vec<String>,
    /// Root used for the org chart when a request does not name one.
    pub default_root: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: parse_origins("http://localhost:5173"),
            default_root: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| Self::default().cors_allowed_origins);

        let default_root = std::env::var("ORG_CHART_ROOT")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|root| !root.is_empty());

        Ok(Self {
            cors_allowed_origins,
            default_root,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" https://hr.example.com , ,http://localhost:5173,");
        assert_eq!(
            origins,
            vec!["https://hr.example.com", "http://localhost:5173"]
        );
    }

    #[test]
    fn default_allows_local_frontend() {
        let config = AppConfig::default();
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.default_root, None);
    }
}
