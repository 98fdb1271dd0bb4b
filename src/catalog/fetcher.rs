use std::sync::Arc;
use std::time::Duration;

use crate::api::{page_offset, FetchError, ProductPage, ProductSource};
use crate::config::ApiConfig;

/// Fixed-size page requests against a [`ProductSource`].
pub struct PageFetcher<S> {
    source: Arc<S>,
    page_size: u32,
    latency: Duration,
}

impl<S> Clone for PageFetcher<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            page_size: self.page_size,
            latency: self.latency,
        }
    }
}

impl<S: ProductSource> PageFetcher<S> {
    pub fn new(source: S, config: &ApiConfig) -> Self {
        Self {
            source: Arc::new(source),
            page_size: config.page_size.max(1),
            latency: config.simulated_latency(),
        }
    }

    /// Fetch the 1-based `page_number`.
    pub async fn fetch_page(&self, page_number: u32) -> Result<ProductPage, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let skip = page_offset(page_number, self.page_size);
        let limit = u64::from(self.page_size);
        tracing::info!(page = page_number, skip, limit, "Fetching product page");

        match self.source.fetch_page(skip, limit).await {
            Ok(page) => {
                tracing::info!(
                    page = page_number,
                    received = page.products.len(),
                    total = page.total,
                    "Product page fetched"
                );
                Ok(page)
            }
            Err(err) => {
                tracing::warn!(
                    page = page_number,
                    error_type = err.error_type(),
                    error = %err,
                    "Product page fetch failed"
                );
                Err(err)
            }
        }
    }
}
