//! Detail-view image carousel.
//!
//! The reducer decides what is on screen; [`CarouselTimer`] produces the
//! ticks. The cycle for a multi-image product is
//! `Idle → Rotating (display, advance, refill) → Idle` on unmount.

mod intent;
mod reducer;
mod state;
mod timer;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::CarouselState;
pub use timer::CarouselTimer;
