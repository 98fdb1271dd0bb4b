//! Model-View-Intent primitives shared by the catalog, store, and carousel.
//!
//! ```text
//! key press / fetch result / timer tick
//!        │
//!        ▼
//!     Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Side effects (network requests, timers) are issued by
//! `App` around the dispatch call, based on the state the reducer returned.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
