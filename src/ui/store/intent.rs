use crate::api::{Product, ProductId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// Replace the selection. `None` means "nothing selected".
    SelectProduct(Option<Product>),
    /// Add the id to favorites, or remove it if already present.
    ToggleFavorite(ProductId),
}

impl Intent for StoreIntent {}
