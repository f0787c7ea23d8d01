//! Retail/wholesale view state.

use crate::mvi::{Intent, Reducer, UiState};
use crate::services::types::{PricingMode, ServicesData};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ServicesState {
    #[default]
    Loading,
    Ready {
        data: ServicesData,
        mode: PricingMode,
        selected: usize,
    },
}

impl UiState for ServicesState {}

impl ServicesState {
    pub fn mode(&self) -> Option<PricingMode> {
        match self {
            ServicesState::Ready { mode, .. } => Some(*mode),
            ServicesState::Loading => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            ServicesState::Ready { selected, .. } => Some(*selected),
            ServicesState::Loading => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ServicesIntent {
    Loaded { data: ServicesData },
    SetMode { mode: PricingMode },
    ToggleMode,
    SelectProduct { index: usize },
}

impl Intent for ServicesIntent {}

pub struct ServicesReducer;

impl Reducer for ServicesReducer {
    type State = ServicesState;
    type Intent = ServicesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (ServicesState::Loading, ServicesIntent::Loaded { data }) => ServicesState::Ready {
                data,
                mode: PricingMode::default(),
                selected: 0,
            },
            (ServicesState::Ready { mode, selected, .. }, ServicesIntent::Loaded { data }) => {
                let count = data.products(mode).len();
                ServicesState::Ready {
                    data,
                    mode,
                    selected: if selected < count { selected } else { 0 },
                }
            }
            // Switching modes always starts from the first product.
            (ServicesState::Ready { data, .. }, ServicesIntent::SetMode { mode }) => {
                ServicesState::Ready {
                    data,
                    mode,
                    selected: 0,
                }
            }
            (ServicesState::Ready { data, mode, .. }, ServicesIntent::ToggleMode) => {
                ServicesState::Ready {
                    data,
                    mode: mode.toggled(),
                    selected: 0,
                }
            }
            (
                ServicesState::Ready {
                    data,
                    mode,
                    selected,
                },
                ServicesIntent::SelectProduct { index },
            ) => {
                let selected = if index < data.products(mode).len() {
                    index
                } else {
                    selected
                };
                ServicesState::Ready {
                    data,
                    mode,
                    selected,
                }
            }
            (state @ ServicesState::Loading, _) => state,
        }
    }
}
