//! Terminal showcase for the category carousel.
//!
//! One blocking loop owns the [`App`](app::App) and drains a single event
//! channel. Key input, resizes, autoplay ticks and API results all arrive
//! there, so state changes never interleave.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::{run, Showcase};
