use std::collections::VecDeque;

use crate::api::Product;
use crate::ui::mvi::UiState;

/// What the detail view shows in its image slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CarouselState {
    /// No product mounted.
    #[default]
    Idle,
    /// The product has no usable image. Stays here until unmounted.
    Placeholder { product: Product },
    /// Single-image product: no rotation ever happens.
    Still {
        product: Product,
        image: Option<String>,
    },
    /// Multi-image product cycling through `queue`.
    Rotating {
        product: Product,
        /// Remaining entries, blank ones included; they are dequeued but
        /// never displayed.
        queue: VecDeque<String>,
        display: Option<String>,
        loading: bool,
    },
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn product(&self) -> Option<&Product> {
        match self {
            CarouselState::Idle => None,
            CarouselState::Placeholder { product }
            | CarouselState::Still { product, .. }
            | CarouselState::Rotating { product, .. } => Some(product),
        }
    }

    pub fn display_image(&self) -> Option<&str> {
        match self {
            CarouselState::Still { image, .. } => image.as_deref(),
            CarouselState::Rotating { display, .. } => display.as_deref(),
            CarouselState::Idle | CarouselState::Placeholder { .. } => None,
        }
    }

    /// True while a rotation timer should be running.
    pub fn needs_rotation(&self) -> bool {
        matches!(self, CarouselState::Rotating { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CarouselState::Rotating { loading: true, .. })
    }

    /// Nothing mounted, or the product has image entries but none is on
    /// screen yet.
    pub fn show_skeleton(&self) -> bool {
        match self.product() {
            None => true,
            Some(product) => self.display_image().is_none() && !product.images.is_empty(),
        }
    }
}
