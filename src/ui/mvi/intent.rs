//! Marker trait for intents.

/// Something that happened: a key press, a page arriving, a timer firing.
pub trait Intent: Send + 'static {}
