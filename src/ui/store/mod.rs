//! Session-wide store shared by the list and detail screens.
//!
//! Holds the currently selected product and the favorites set. Lives for
//! the process lifetime; nothing is persisted.

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::StoreState;
