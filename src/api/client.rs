use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::api::error::FetchError;
use crate::api::types::ProductPage;
use crate::config::ApiConfig;

/// Source of product pages.
///
/// The pagination logic only ever talks to this trait, so tests can swap
/// the HTTP client for an in-memory source.
pub trait ProductSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> impl Future<Output = Result<ProductPage, FetchError>> + Send;
}

/// Offset of the first record of `page_number` (1-based).
pub fn page_offset(page_number: u32, page_size: u32) -> u64 {
    u64::from(page_number.max(1) - 1) * u64::from(page_size)
}

/// `reqwest`-backed product source.
pub struct HttpProductSource {
    client: Client,
    endpoint: Url,
}

impl HttpProductSource {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let endpoint = products_endpoint(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| FetchError::Request {
                url: endpoint.to_string(),
                source: e,
            })?;

        Ok(Self { client, endpoint })
    }

    /// Full URL for one page request.
    pub fn page_url(&self, skip: u64, limit: u64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &skip.to_string());
        url
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch_page(&self, skip: u64, limit: u64) -> Result<ProductPage, FetchError> {
        let url = self.page_url(skip, limit);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })?;

        serde_json::from_slice::<ProductPage>(&body).map_err(|e| FetchError::Decode { source: e })
    }
}

fn products_endpoint(base_url: &str) -> Result<Url, FetchError> {
    let raw = format!("{}/products", base_url.trim_end_matches('/'));
    let url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
