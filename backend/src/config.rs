use anyhow::{Context, Result};
use shared::schedule::TimezonePolicy;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string. Without one the server keeps records in memory.
    pub database_url: Option<String>,
    pub db_pool_size: usize,
    pub port: u16,
    /// Zone webinar date/time picks are interpreted in.
    pub webinar_timezone: TimezonePolicy,
    pub frontend_dir: String,
    pub cors_allowed_origins: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            db_pool_size: lookup("DB_POOL_SIZE")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DB_POOL_SIZE must be a valid number")?,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            webinar_timezone: lookup("WEBINAR_TIMEZONE")
                .unwrap_or_else(|| "local".to_string())
                .parse()
                .context("WEBINAR_TIMEZONE must be 'local', 'UTC' or an IANA zone name")?,
            frontend_dir: lookup("FRONTEND_DIR").unwrap_or_else(|| "frontend/dist".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),
        })
    }

    /// Startup warning for zone settings that silently depend on the host.
    pub fn timezone_warning(&self) -> Option<String> {
        match self.webinar_timezone {
            TimezonePolicy::Local => Some(
                "WEBINAR_TIMEZONE is 'local': webinar times are read in this server's \
                 timezone, not the scheduler's browser timezone. Set an IANA zone name \
                 if the two differ."
                    .to_string(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_pool_size, 10);
        assert_eq!(config.webinar_timezone, TimezonePolicy::Local);
        assert_eq!(config.frontend_dir, "frontend/dist");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/admin"),
            ("PORT", "3000"),
            ("WEBINAR_TIMEZONE", "Asia/Kolkata"),
        ])
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/admin"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.webinar_timezone.to_string(), "Asia/Kolkata");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("WEBINAR_TIMEZONE", "Nowhere/Special")]).is_err());
    }

    #[test]
    fn test_local_timezone_is_called_out() {
        let local = config_from(&[]).unwrap();
        assert!(local.timezone_warning().unwrap().contains("server's timezone"));

        let named = config_from(&[("WEBINAR_TIMEZONE", "Europe/Berlin")]).unwrap();
        assert!(named.timezone_warning().is_none());
    }

    #[test]
    fn test_blank_database_url_means_memory_store() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }
}
