use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_USER_ID: &str = "me";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub language: String,
    pub user_id: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: None,
            language: DEFAULT_LANGUAGE.to_owned(),
            user_id: DEFAULT_USER_ID.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn from_env() -> Self {
        let base_url = non_empty_var("CONNECTHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let language = non_empty_var("CONNECTHUB_LANGUAGE")
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());
        let user_id = non_empty_var("CONNECTHUB_USER_ID")
            .unwrap_or_else(|| DEFAULT_USER_ID.to_owned());
        let timeout_secs = env::var("CONNECTHUB_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let mut config = Self::new(base_url)
            .with_language(language)
            .with_user_id(user_id);
        config.token = non_empty_var("CONNECTHUB_API_TOKEN");
        config.timeout = Duration::from_secs(timeout_secs);
        config
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
