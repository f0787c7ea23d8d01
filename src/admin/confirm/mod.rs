//! Confirm dialog guarding destructive admin operations.
//!
//! - `state.rs` - Dialog state and the pending [`AdminAction`]
//! - `intent.rs` - User actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::{AdminAction, ConfirmDialogState};
