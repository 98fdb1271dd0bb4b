use crate::api::Product;
use crate::ui::mvi::UiState;

/// Why a page is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First load when the list screen opens.
    Initial,
    /// User-requested reload from page 1.
    Refresh,
    /// Next page for infinite scroll.
    More,
}

impl FetchKind {
    /// Initial and refresh loads replace the list instead of appending.
    pub fn replaces(self) -> bool {
        matches!(self, FetchKind::Initial | FetchKind::Refresh)
    }
}

/// Paginated product list plus the search view over it.
///
/// `products` never holds two records with the same id, and `filtered` is
/// always `filter_by_title(products, query)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub(super) products: Vec<Product>,
    pub(super) filtered: Vec<Product>,
    pub(super) query: String,
    pub(super) page: u32,
    pub(super) total: u64,
    pub(super) has_more: bool,
    pub(super) initial_loading: bool,
    pub(super) loading: bool,
    pub(super) refreshing: bool,
    pub(super) error: Option<String>,
    /// Bumped by every initial/refresh load; results from older generations
    /// are dropped.
    pub(super) generation: u64,
    pub(super) cursor: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page: 1,
            total: 0,
            has_more: true,
            // The list screen starts on the skeleton until the first page lands.
            initial_loading: true,
            loading: false,
            refreshing: false,
            error: None,
            generation: 0,
            cursor: 0,
        }
    }
}

impl UiState for CatalogState {}

impl CatalogState {
    /// Whether a `BeginFetch` of this kind would be honoured.
    pub fn accepts(&self, kind: FetchKind) -> bool {
        match kind {
            FetchKind::Initial | FetchKind::Refresh => true,
            FetchKind::More => {
                self.has_more
                    && !self.loading
                    && !self.refreshing
                    && !self.initial_loading
                    && self.error.is_none()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn is_busy(&self) -> bool {
        self.initial_loading || self.loading || self.refreshing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered.get(self.cursor)
    }

    /// Rows of the filtered list below the cursor.
    pub fn remaining_below_cursor(&self) -> usize {
        self.filtered.len().saturating_sub(self.cursor + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_waits_for_first_page() {
        let state = CatalogState::default();
        assert!(state.is_initial_loading());
        assert!(state.has_more());
        assert_eq!(state.page(), 1);
        assert!(state.products().is_empty());
    }

    #[test]
    fn initial_and_refresh_are_always_accepted() {
        let state = CatalogState {
            has_more: false,
            loading: true,
            error: Some("boom".into()),
            ..CatalogState::default()
        };
        assert!(state.accepts(FetchKind::Initial));
        assert!(state.accepts(FetchKind::Refresh));
        assert!(!state.accepts(FetchKind::More));
    }

    #[test]
    fn more_is_gated_by_every_flag() {
        let idle = CatalogState {
            initial_loading: false,
            ..CatalogState::default()
        };
        assert!(idle.accepts(FetchKind::More));

        let cases = [
            CatalogState { loading: true, ..idle.clone() },
            CatalogState { refreshing: true, ..idle.clone() },
            CatalogState { initial_loading: true, ..idle.clone() },
            CatalogState { has_more: false, ..idle.clone() },
            CatalogState { error: Some("x".into()), ..idle.clone() },
        ];
        for state in cases {
            assert!(!state.accepts(FetchKind::More), "{:?}", state);
        }
    }

    #[test]
    fn replaces_only_for_initial_and_refresh() {
        assert!(FetchKind::Initial.replaces());
        assert!(FetchKind::Refresh.replaces());
        assert!(!FetchKind::More.replaces());
    }
}
