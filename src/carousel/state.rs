//! Carousel position state.

use crate::carousel::index::{circular_index, step};
use crate::carousel::item::CarouselItem;
use crate::carousel::window::{visible_window, Slot, WindowEntry};
use crate::mvi::UiState;

/// Most recent navigation direction. Only used to pick enter/exit geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Still,
    Forward,
    Backward,
}

impl Direction {
    pub fn from_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => Direction::Forward,
            -1 => Direction::Backward,
            _ => Direction::Still,
        }
    }
}

/// What activating a visible entry should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The centered item was chosen: open its detail view.
    Open { id: String },
    /// A side card was chosen: move towards it.
    Step { delta: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<T> {
    items: Vec<T>,
    active_index: usize,
    direction: Direction,
    auto_playing: bool,
}

impl<T> Default for CarouselState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            active_index: 0,
            direction: Direction::Still,
            auto_playing: true,
        }
    }
}

impl<T: CarouselItem> UiState for CarouselState<T> {}

impl<T: CarouselItem> CarouselState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Starts with autoplay already off (config `carousel.autoplay = false`).
    pub fn without_autoplay(items: Vec<T>) -> Self {
        Self {
            items,
            auto_playing: false,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    /// True while the autoplay timer should be running.
    pub fn autoplay_eligible(&self) -> bool {
        self.auto_playing && self.items.len() > 1
    }

    pub fn active_item(&self) -> Option<&T> {
        self.items.get(self.active_index)
    }

    /// Moves the active position by `delta` with wraparound.
    pub fn paginate(&mut self, delta: i64) {
        if let Some(next) = step(self.active_index, delta, self.items.len()) {
            self.direction = Direction::from_delta(delta);
            self.active_index = next;
        }
    }

    /// Jumps straight to `target` and stops autoplay for good.
    pub fn select_index(&mut self, target: i64) {
        if let Some(next) = circular_index(target, self.items.len()) {
            self.active_index = next;
            self.direction = Direction::Still;
            self.auto_playing = false;
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.auto_playing = false;
    }

    /// Replaces the whole item list and re-resolves the active position.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        let current = i64::try_from(self.active_index).unwrap_or(0);
        self.active_index = circular_index(current, self.items.len()).unwrap_or(0);
    }

    pub fn window(&self) -> Vec<WindowEntry<'_, T>> {
        visible_window(&self.items, self.active_index)
    }

    pub fn activation(&self, entry: &WindowEntry<'_, T>) -> Activation {
        match entry.slot {
            Slot::Center => Activation::Open {
                id: entry.item.item_id().to_string(),
            },
            Slot::Left => Activation::Step { delta: -1 },
            Slot::Right => Activation::Step { delta: 1 },
        }
    }

    /// Activation of the entry rendered in `slot`, if that slot is filled.
    pub fn activate(&self, slot: Slot) -> Option<Activation> {
        self.window()
            .iter()
            .find(|entry| entry.slot == slot)
            .map(|entry| self.activation(entry))
    }
}
