//! Client for the remote product catalog (`GET /products?limit=&skip=`).

mod client;
mod error;
mod types;

pub use client::{page_offset, HttpProductSource, ProductSource};
pub use error::FetchError;
pub use types::{is_valid_image, Product, ProductId, ProductPage};
