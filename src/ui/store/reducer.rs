use crate::ui::mvi::Reducer;

use super::intent::StoreIntent;
use super::state::StoreState;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::SelectProduct(product) => StoreState {
                selected: product,
                ..state
            },
            StoreIntent::ToggleFavorite(id) => {
                let mut favorites = state.favorites;
                if !favorites.remove(&id) {
                    favorites.insert(id);
                }
                StoreState { favorites, ..state }
            }
        }
    }
}
