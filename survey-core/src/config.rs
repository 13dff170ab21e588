use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.strateegia.digital";
pub const DEFAULT_COMMENT_PATH: &str =
    "/projects/v1/divergence-point/{divergence_point_id}/question/{question_id}/comment";
/// Served by the host alongside this app, not by this app's router.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    /// Path template with `{divergence_point_id}` and `{question_id}` placeholders.
    pub comment_path: String,
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            comment_path: DEFAULT_COMMENT_PATH.into(),
            login_path: DEFAULT_LOGIN_PATH.into(),
        }
    }
}

impl Config {
    /// Values baked in at build time. The browser has no process environment,
    /// so `SURVEY_*` variables are read by the compiler, not at runtime.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            match key {
                "SURVEY_API_URL" => option_env!("SURVEY_API_URL"),
                "SURVEY_COMMENT_PATH" => option_env!("SURVEY_COMMENT_PATH"),
                "SURVEY_LOGIN_PATH" => option_env!("SURVEY_LOGIN_PATH"),
                _ => None,
            }
            .map(ToString::to_string)
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let config = Self {
            api_base_url: get("SURVEY_API_URL", DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            comment_path: get("SURVEY_COMMENT_PATH", DEFAULT_COMMENT_PATH),
            login_path: get("SURVEY_LOGIN_PATH", DEFAULT_LOGIN_PATH),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()));
        }
        if !self.comment_path.starts_with('/') {
            return Err(ConfigError::InvalidCommentPath(self.comment_path.clone()));
        }
        Ok(())
    }

    /// Identifiers are substituted as given; callers encode them first.
    pub fn comment_url(&self, divergence_point_id: &str, question_id: &str) -> String {
        let path = self
            .comment_path
            .replace("{divergence_point_id}", divergence_point_id)
            .replace("{question_id}", question_id);
        format!("{}{}", self.api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn blank_values_fall_back_and_trailing_slash_trimmed() {
        let config = Config::from_lookup(|k| match k {
            "SURVEY_API_URL" => Some(" http://localhost:8080/ ".into()),
            "SURVEY_LOGIN_PATH" => Some("   ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = Config::from_lookup(|k| (k == "SURVEY_API_URL").then(|| "ftp://x".into()))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://x".into()));
    }

    #[test]
    fn fills_comment_url_template() {
        let config = Config::from_lookup(|k| match k {
            "SURVEY_API_URL" => Some("https://api.test".into()),
            "SURVEY_COMMENT_PATH" => Some("/dp/{divergence_point_id}/q/{question_id}".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.comment_url("p1", "q2"), "https://api.test/dp/p1/q/q2");
        assert_eq!(config.comment_url("", ""), "https://api.test/dp//q/");
    }

    #[test]
    fn login_path_points_outside_the_survey_routes() {
        let config = Config::default();
        assert_eq!(config.login_path, "/login");
        assert!(!config.login_path.starts_with("/dashboard/survey"));
    }
}
