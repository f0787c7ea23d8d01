//! Circular carousel engine.
//!
//! Generic over any [`CarouselItem`]. The pieces:
//! - `index.rs` - circular index resolution
//! - `state.rs` - position, direction and autoplay flag
//! - `intent.rs` / `reducer.rs` - MVI transitions
//! - `window.rs` - which entries to render around the active one
//! - `autoplay.rs` - the repeating timer that feeds `AutoAdvance`

mod autoplay;
mod index;
mod intent;
mod item;
mod reducer;
mod state;
mod window;

pub use autoplay::{Autoplay, AutoplayDeps, AutoplayStatus, DEFAULT_AUTOPLAY_PERIOD};
pub use index::{circular_index, step};
pub use intent::CarouselIntent;
pub use item::CarouselItem;
pub use reducer::CarouselReducer;
pub use state::{Activation, CarouselState, Direction};
pub use window::{visible_window, Slot, WindowEntry, WINDOW_SIZE};

impl<T: CarouselItem> CarouselState<T> {
    /// Current autoplay dependencies, for [`Autoplay::sync`].
    pub fn autoplay_deps(&self) -> AutoplayDeps {
        AutoplayDeps {
            eligible: self.autoplay_eligible(),
            item_count: self.len(),
        }
    }
}
