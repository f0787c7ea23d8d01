//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of local UI state in the storefront (carousel position,
//! confirm dialog, pricing mode) is driven through these traits so that
//! state transitions stay pure and testable without a terminal.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what a view needs to render
//! - **Intent**: User actions, timer ticks or fetch results
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! [`Timed`] covers self-clearing messages such as lead notifications.

mod intent;
mod reducer;
mod state;
mod timed;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use timed::{expire_after, Timed};
