use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A single catalog record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub thumbnail: String,
    /// Ordered image URLs. May contain blank entries.
    #[serde(default)]
    pub images: Vec<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    /// Image URLs that are usable for display, in their original order.
    pub fn valid_images(&self) -> Vec<String> {
        self.images
            .iter()
            .filter(|url| is_valid_image(url))
            .cloned()
            .collect()
    }
}

/// Blank and whitespace-only URLs are skipped by the carousel.
pub fn is_valid_image(url: &str) -> bool {
    !url.trim().is_empty()
}

/// One page of the paginated `/products` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
