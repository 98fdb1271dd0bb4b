//! Pure catalog logic: page merging, title search, and the page fetcher.

mod fetcher;
mod list;

pub use fetcher::PageFetcher;
pub use list::{filter_by_title, merge_unique, unique_page};
