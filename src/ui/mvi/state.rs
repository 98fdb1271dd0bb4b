//! Marker trait for reducer-owned state.

/// State owned by a reducer.
///
/// `Default` is the state before anything happened; `mem::take` relies on
/// it when dispatching.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
