use crate::api::ProductPage;
use crate::ui::mvi::Intent;

use super::state::FetchKind;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A page request is about to be sent. Suppressed `More` requests leave
    /// the state untouched.
    BeginFetch { page: u32, kind: FetchKind },
    /// A page arrived. Tagged with the generation it was requested under.
    PageLoaded {
        generation: u64,
        kind: FetchKind,
        page: ProductPage,
    },
    /// Network or decode failure.
    FetchFailed { generation: u64, message: String },
    /// Always follows a fetch, success or not. Clears every loading flag.
    FetchSettled { generation: u64 },
    SetQuery { query: String },
    MoveCursor { delta: isize },
}

impl Intent for CatalogIntent {}
