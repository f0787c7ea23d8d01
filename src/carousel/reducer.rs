use std::marker::PhantomData;

use crate::carousel::intent::CarouselIntent;
use crate::carousel::item::CarouselItem;
use crate::carousel::state::CarouselState;
use crate::mvi::Reducer;

pub struct CarouselReducer<T>(PhantomData<T>);

impl<T: CarouselItem> Reducer for CarouselReducer<T> {
    type State = CarouselState<T>;
    type Intent = CarouselIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::ReplaceItems { items } => state.replace_items(items),
            CarouselIntent::Navigate { delta } => {
                if !state.is_empty() {
                    state.paginate(delta);
                    state.stop_autoplay();
                }
            }
            CarouselIntent::SideCard { delta } => state.paginate(delta),
            CarouselIntent::Select { index } => state.select_index(index),
            CarouselIntent::AutoAdvance => {
                // Ticks queued before a manual action must not move anything.
                if state.autoplay_eligible() {
                    state.paginate(1);
                }
            }
        }
        state
    }
}
