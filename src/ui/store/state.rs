use std::collections::BTreeSet;

use crate::api::{Product, ProductId};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    pub(super) selected: Option<Product>,
    pub(super) favorites: BTreeSet<ProductId>,
}

impl UiState for StoreState {}

impl StoreState {
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }
}
