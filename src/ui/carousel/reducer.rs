use std::collections::VecDeque;

use crate::api::{is_valid_image, Product};
use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::CarouselState;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Mount { product } => match product {
                None => CarouselState::Idle,
                Some(product) => mount(product),
            },

            CarouselIntent::Advance => match state {
                CarouselState::Rotating {
                    product,
                    mut queue,
                    mut display,
                    loading,
                } => {
                    if let Some(next) = queue.pop_front() {
                        if is_valid_image(&next) {
                            display = Some(next);
                        }
                    }
                    if queue.is_empty() {
                        queue = VecDeque::from(product.valid_images());
                        if queue.is_empty() && display.is_none() {
                            return CarouselState::Placeholder { product };
                        }
                    }
                    CarouselState::Rotating {
                        product,
                        queue,
                        display,
                        loading,
                    }
                }
                other => other,
            },

            CarouselIntent::LoadingElapsed => match state {
                CarouselState::Rotating {
                    product,
                    queue,
                    display,
                    ..
                } => CarouselState::Rotating {
                    product,
                    queue,
                    display,
                    loading: false,
                },
                other => other,
            },

            CarouselIntent::Unmount => CarouselState::Idle,
        }
    }
}

fn mount(product: Product) -> CarouselState {
    let valid = product.valid_images();
    if product.images.len() == 1 || valid.len() == 1 {
        let image = valid.into_iter().next();
        return CarouselState::Still { product, image };
    }

    if valid.is_empty() {
        return CarouselState::Placeholder { product };
    }

    CarouselState::Rotating {
        queue: product.images.iter().cloned().collect(),
        product,
        display: None,
        loading: true,
    }
}
