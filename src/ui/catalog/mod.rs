//! Product list feature module.
//!
//! Owns the paginated, deduplicated product list and the search filter
//! derived from it.
//!
//! - `state.rs` - accumulated list, filtered list, loading/exhaustion/error flags
//! - `intent.rs` - fetch lifecycle events, query edits, cursor moves
//! - `reducer.rs` - state transitions (pure, no I/O)

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, FetchKind};
