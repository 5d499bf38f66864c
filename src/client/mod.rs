use std::time::Duration;

use thiserror::Error;

use crate::model::Business;

/// Base endpoint of the original deployment; overridable via config/CLI.
pub const DEFAULT_API_URL: &str = "http://localhost:5290/api/business";

const USER_AGENT: &str = concat!("bizdir/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build http client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy: {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 10,
            proxy: None,
        }
    }
}

/// Thin interface to the remote record store: one HTTP request per
/// operation, single attempt, no retry. Any transport failure or a status
/// outside {200, 201, 204} surfaces as a `ClientError` with no further
/// interpretation of the response body.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

pub(crate) fn is_success(status: u16) -> bool {
    matches!(status, 200 | 201 | 204)
}

impl ApiClient {
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(options.timeout_seconds.max(1)));

        if let Some(proxy) = options.proxy.as_deref().filter(|p| !p.trim().is_empty()) {
            let proxy_url = proxy.to_string();
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| ClientError::ProxySetup {
                proxy: proxy_url,
                source: e,
            })?;
            builder = builder.proxy(proxy);
        }

        let http = builder
            .build()
            .map_err(|e| ClientError::Build { source: e })?;

        Ok(Self {
            http,
            base_url: options.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetches the full collection. All paging and filtering is client-side.
    pub async fn list(&self) -> Result<Vec<Business>, ClientError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| ClientError::Request { source: e })?;
        let status = response.status().as_u16();
        if !is_success(status) {
            return Err(ClientError::UnexpectedStatus { status });
        }
        response
            .json::<Vec<Business>>()
            .await
            .map_err(|e| ClientError::Decode { source: e })
    }

    /// Creates a record. The draft must carry no id; the store assigns one.
    pub async fn create(&self, record: &Business) -> Result<(), ClientError> {
        let response = self
            .http
            .post(&self.base_url)
            .json(record)
            .send()
            .await
            .map_err(|e| ClientError::Request { source: e })?;
        expect_success(response.status().as_u16())
    }

    pub async fn update(&self, id: i64, record: &Business) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.record_url(id))
            .json(record)
            .send()
            .await
            .map_err(|e| ClientError::Request { source: e })?;
        expect_success(response.status().as_u16())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| ClientError::Request { source: e })?;
        expect_success(response.status().as_u16())
    }
}

fn expect_success(status: u16) -> Result<(), ClientError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ClientError::UnexpectedStatus { status })
    }
}
