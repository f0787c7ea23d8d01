//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (arrow keys, dot selection, confirm buttons)
/// - System events (autoplay ticks, API responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
