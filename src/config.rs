use std::fmt;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Gut Health Management Platform";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// File name of the serialized predictor shipped alongside the app.
pub const PREDICTOR_FILE_NAME: &str = "gut_health_predictor.pkl";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "gut_health_lib=info,gut_health=info"
}

/// Get the application data directory
/// ~/GutHealth/ on all platforms, falling back to the working directory.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("GutHealth")
}

/// Get the models directory
pub fn models_dir() -> PathBuf {
    app_data_dir().join("models")
}

/// Default location of the predictor artifact.
pub fn predictor_path() -> PathBuf {
    models_dir().join(PREDICTOR_FILE_NAME)
}

/// Settings for the external advice service.
///
/// Built once at startup and handed to the client constructor; nothing
/// reads credentials from global state after that.
#[derive(Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AdvisorConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// `GUT_HEALTH_API_KEY` wins over `OPENAI_API_KEY`. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let timeout_secs = match non_blank("GUT_HEALTH_TIMEOUT_SECS") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid GUT_HEALTH_TIMEOUT_SECS, using default");
                defaults.timeout_secs
            }),
            None => defaults.timeout_secs,
        };

        Self {
            api_key: non_blank("GUT_HEALTH_API_KEY").or_else(|| non_blank("OPENAI_API_KEY")),
            base_url: non_blank("GUT_HEALTH_API_BASE").unwrap_or(defaults.base_url),
            model: non_blank("GUT_HEALTH_MODEL").unwrap_or(defaults.model),
            timeout_secs,
        }
    }
}

impl fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn app_data_dir_ends_with_app_folder() {
        assert!(app_data_dir().ends_with("GutHealth"));
    }

    #[test]
    fn predictor_path_under_models_dir() {
        let path = predictor_path();
        assert!(path.starts_with(models_dir()));
        assert!(path.ends_with(PREDICTOR_FILE_NAME));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AdvisorConfig::from_lookup(|_| None);
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.model, "gpt-4");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn dedicated_key_wins_over_openai_key() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("GUT_HEALTH_API_KEY", "sk-app"),
            ("OPENAI_API_KEY", "sk-global"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("sk-app"));
    }

    #[test]
    fn openai_key_used_when_dedicated_key_blank() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("GUT_HEALTH_API_KEY", "   "),
            ("OPENAI_API_KEY", "sk-global"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("sk-global"));
    }

    #[test]
    fn overrides_base_model_and_timeout() {
        let config = AdvisorConfig::from_lookup(lookup_from(&[
            ("GUT_HEALTH_API_BASE", "http://localhost:8080/v1"),
            ("GUT_HEALTH_MODEL", "gpt-4o-mini"),
            ("GUT_HEALTH_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let config =
            AdvisorConfig::from_lookup(lookup_from(&[("GUT_HEALTH_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AdvisorConfig {
            api_key: Some("sk-secret".into()),
            ..AdvisorConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
