use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CarouselIntent {
    /// Detail view opened for `product` (or with nothing selected).
    Mount { product: Option<Product> },
    /// Rotation interval elapsed.
    Advance,
    /// One-shot loading delay elapsed.
    LoadingElapsed,
    /// Detail view closed.
    Unmount,
}

impl Intent for CarouselIntent {}
