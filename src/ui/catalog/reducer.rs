//! Reducer for the product list.

use crate::catalog::{filter_by_title, merge_unique, unique_page};
use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::{CatalogState, FetchKind};

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::BeginFetch { page, kind } => {
                if !state.accepts(kind) {
                    return state;
                }
                match kind {
                    FetchKind::Initial | FetchKind::Refresh => CatalogState {
                        generation: state.generation + 1,
                        page: if kind == FetchKind::Refresh { 1 } else { page.max(1) },
                        has_more: true,
                        error: None,
                        initial_loading: true,
                        refreshing: kind == FetchKind::Refresh,
                        loading: false,
                        ..state
                    },
                    FetchKind::More => CatalogState {
                        page: page.max(1),
                        loading: true,
                        ..state
                    },
                }
            }

            CatalogIntent::PageLoaded {
                generation,
                kind,
                page,
            } => {
                if generation != state.generation {
                    tracing::debug!(
                        generation,
                        current = state.generation,
                        "Dropping stale product page"
                    );
                    return state;
                }

                let mut state = state;
                let products = std::mem::take(&mut state.products);

                if page.products.is_empty() {
                    // An empty first page still replaces the list.
                    let products = if kind.replaces() { Vec::new() } else { products };
                    let filtered = filter_by_title(&products, &state.query);
                    return CatalogState {
                        cursor: clamp_cursor(state.cursor, filtered.len()),
                        products,
                        filtered,
                        total: page.total,
                        has_more: false,
                        ..state
                    };
                }

                let products = if kind.replaces() {
                    unique_page(page.products)
                } else {
                    merge_unique(products, page.products)
                };
                let filtered = filter_by_title(&products, &state.query);
                let cursor = if kind.replaces() {
                    0
                } else {
                    clamp_cursor(state.cursor, filtered.len())
                };

                CatalogState {
                    products,
                    filtered,
                    cursor,
                    total: page.total,
                    ..state
                }
            }

            CatalogIntent::FetchFailed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                CatalogState {
                    error: Some(message),
                    ..state
                }
            }

            CatalogIntent::FetchSettled { generation } => {
                if generation != state.generation {
                    return state;
                }
                CatalogState {
                    initial_loading: false,
                    loading: false,
                    refreshing: false,
                    ..state
                }
            }

            CatalogIntent::SetQuery { query } => {
                let filtered = filter_by_title(&state.products, &query);
                CatalogState {
                    query,
                    filtered,
                    cursor: 0,
                    ..state
                }
            }

            CatalogIntent::MoveCursor { delta } => {
                let len = state.filtered.len();
                let target = if delta < 0 {
                    state.cursor.saturating_sub(delta.unsigned_abs())
                } else {
                    state.cursor.saturating_add(delta.unsigned_abs())
                };
                let cursor = clamp_cursor(target, len);
                CatalogState { cursor, ..state }
            }
        }
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}
