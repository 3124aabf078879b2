use anyhow::Context as _;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::CacheService;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::envelope::Envelope;

/// Path prefix shared by every gamification endpoint.
pub const API_PREFIX: &str = "/api/v1/gamification";

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Shared backend handle passed across crates.
#[derive(Clone, Debug)]
pub struct GamificationApi {
    http: reqwest::Client,
    config: ApiConfig,
    cache: CacheService,
}

impl GamificationApi {
    /// Create a handle with caching switched off.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        Self::with_cache(config, CacheService::disabled("connecthub:prod"))
    }

    /// Create a handle that fronts reads with `cache`.
    pub fn with_cache(config: ApiConfig, cache: CacheService) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?)
            .user_agent(concat!("connecthub/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            config,
            cache,
        })
    }

    /// Expose the cache service for endpoint modules.
    pub fn cache(&self) -> &CacheService {
        &self.cache
    }

    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.config.base_url, API_PREFIX, path)
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!(path, "GET gamification endpoint");
        let request = self.http.get(self.url(path));
        self.execute(path, request).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST gamification endpoint");
        let mut request = self.http.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(path, request).await
    }

    async fn execute<T>(&self, path: &str, request: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let transport = |source| ApiError::Transport {
            path: path.to_owned(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes)
                .chars()
                .take(MAX_ERROR_BODY_CHARS)
                .collect::<String>();
            return Err(ApiError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
                body: body.trim().to_owned(),
            });
        }

        serde_json::from_slice::<Envelope<T>>(&bytes)
            .map(Envelope::into_inner)
            .map_err(|e| ApiError::Decode {
                path: path.to_owned(),
                message: e.to_string(),
            })
    }
}

fn default_headers(config: &ApiConfig) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(&config.language).context("language is not a valid header value")?,
    );

    if let Some(token) = config.token.as_deref() {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("api token is not a valid header value")?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
