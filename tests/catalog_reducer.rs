mod common;

use catalog_browser::api::Product;
use catalog_browser::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState, FetchKind};
use catalog_browser::ui::mvi::Reducer;
use common::{ids, page, product, products};

fn begin(state: CatalogState, page_number: u32, kind: FetchKind) -> CatalogState {
    CatalogReducer::reduce(
        state,
        CatalogIntent::BeginFetch {
            page: page_number,
            kind,
        },
    )
}

fn land(state: CatalogState, kind: FetchKind, records: Vec<Product>) -> CatalogState {
    let generation = state.generation();
    let state = CatalogReducer::reduce(
        state,
        CatalogIntent::PageLoaded {
            generation,
            kind,
            page: page(records, 100),
        },
    );
    CatalogReducer::reduce(state, CatalogIntent::FetchSettled { generation })
}

fn fail(state: CatalogState) -> CatalogState {
    let generation = state.generation();
    let state = CatalogReducer::reduce(
        state,
        CatalogIntent::FetchFailed {
            generation,
            message: "connection refused".to_string(),
        },
    );
    CatalogReducer::reduce(state, CatalogIntent::FetchSettled { generation })
}

fn query(state: CatalogState, query: &str) -> CatalogState {
    CatalogReducer::reduce(
        state,
        CatalogIntent::SetQuery {
            query: query.to_string(),
        },
    )
}

fn loaded(initial: &[u64]) -> CatalogState {
    let state = begin(CatalogState::default(), 1, FetchKind::Initial);
    land(state, FetchKind::Initial, products(initial))
}

#[test]
fn accumulated_list_keeps_first_seen_order_without_duplicates() {
    let state = loaded(&[1, 2, 3]);
    let state = begin(state, 2, FetchKind::More);
    let state = land(state, FetchKind::More, products(&[3, 4, 2, 5]));
    let state = begin(state, 3, FetchKind::More);
    let state = land(state, FetchKind::More, products(&[5, 6, 6]));

    assert_eq!(ids(state.products()), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ids(state.filtered()), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(state.page(), 3);
}

#[test]
fn refresh_replaces_list_and_resets_flags() {
    let state = loaded(&[1, 2, 3]);
    let state = begin(state, 2, FetchKind::More);
    let state = land(state, FetchKind::More, Vec::new());
    assert!(!state.has_more());

    let state = begin(state, 1, FetchKind::Refresh);
    assert!(state.is_refreshing());
    assert!(state.has_more());
    assert_eq!(state.page(), 1);

    let state = land(state, FetchKind::Refresh, products(&[9, 8]));
    assert_eq!(ids(state.products()), vec![9, 8]);
    assert_eq!(ids(state.filtered()), vec![9, 8]);
    assert!(!state.is_refreshing());
    assert!(state.has_more());
}

#[test]
fn refresh_clears_error() {
    let state = begin(CatalogState::default(), 1, FetchKind::Initial);
    let state = fail(state);
    assert_eq!(state.error(), Some("connection refused"));

    let state = begin(state, 1, FetchKind::Refresh);
    assert_eq!(state.error(), None);
}

#[test]
fn query_matches_title_case_insensitively() {
    let state = begin(CatalogState::default(), 1, FetchKind::Initial);
    let state = land(
        state,
        FetchKind::Initial,
        vec![
            product(1, "Red Hat"),
            product(2, "Blue Shirt"),
            product(3, "Green Socks"),
        ],
    );

    let state = query(state, "b");
    assert_eq!(ids(state.filtered()), vec![2]);

    let state = query(state, "");
    assert_eq!(ids(state.filtered()), vec![1, 2, 3]);
}

#[test]
fn changing_query_never_compounds() {
    let state = loaded(&[1, 2, 3, 12]);
    let state = query(state, "1");
    assert_eq!(ids(state.filtered()), vec![1, 12]);
    let state = query(state, "2");
    assert_eq!(ids(state.filtered()), vec![2, 12]);
}

#[test]
fn active_query_filters_the_deduplicated_list() {
    let state = loaded(&[1, 2]);
    let state = query(state, "product");
    let state = begin(state, 2, FetchKind::More);
    let state = land(state, FetchKind::More, products(&[2, 3]));

    assert_eq!(ids(state.filtered()), vec![1, 2, 3]);
}

#[test]
fn exhaustion_blocks_further_load_more() {
    let state = loaded(&[1, 2]);
    let state = begin(state, 2, FetchKind::More);
    let state = land(state, FetchKind::More, Vec::new());
    assert!(!state.has_more());
    assert!(!state.accepts(FetchKind::More));

    let before = state.clone();
    let state = begin(state, 3, FetchKind::More);
    assert_eq!(state, before);
    assert_eq!(ids(state.products()), vec![1, 2]);
}

#[test]
fn load_more_is_gated_while_busy() {
    let state = begin(CatalogState::default(), 1, FetchKind::Initial);
    assert!(!state.accepts(FetchKind::More));

    let state = land(state, FetchKind::Initial, products(&[1]));
    let state = begin(state, 2, FetchKind::More);
    assert!(state.is_loading_more());
    assert!(!state.accepts(FetchKind::More));

    let refreshing = begin(loaded(&[1]), 1, FetchKind::Refresh);
    assert!(!refreshing.accepts(FetchKind::More));
}

#[test]
fn failure_keeps_accumulated_pages() {
    let state = loaded(&[1, 2]);
    let state = begin(state, 2, FetchKind::More);
    let state = fail(state);

    assert_eq!(ids(state.products()), vec![1, 2]);
    assert!(state.error().is_some());
    assert!(!state.is_loading_more());
    assert!(!state.accepts(FetchKind::More));
}

#[test]
fn superseded_fetch_results_are_dropped() {
    let state = loaded(&[1, 2]);
    let state = begin(state, 2, FetchKind::More);
    let stale = state.generation();

    // Refresh overtakes the load-more.
    let state = begin(state, 1, FetchKind::Refresh);
    let state = CatalogReducer::reduce(
        state,
        CatalogIntent::PageLoaded {
            generation: stale,
            kind: FetchKind::More,
            page: page(products(&[77]), 100),
        },
    );
    assert!(!state.products().iter().any(|p| p.id == 77));

    let state = land(state, FetchKind::Refresh, products(&[5]));
    assert_eq!(ids(state.products()), vec![5]);
}

#[test]
fn stale_settle_does_not_clear_current_loading() {
    let state = loaded(&[1]);
    let old = state.generation();
    let state = begin(state, 1, FetchKind::Refresh);

    let state = CatalogReducer::reduce(state, CatalogIntent::FetchSettled { generation: old });
    assert!(state.is_refreshing());
}

#[test]
fn empty_first_page_clears_the_list() {
    let state = loaded(&[1, 2]);
    let state = begin(state, 1, FetchKind::Refresh);
    let state = land(state, FetchKind::Refresh, Vec::new());

    assert!(state.products().is_empty());
    assert!(state.filtered().is_empty());
    assert!(!state.has_more());
}
