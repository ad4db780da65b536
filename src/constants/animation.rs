//! Animation-related constants.

/// Default length of a pose transition in milliseconds
pub const TRANSITION_DEFAULT_MS: u64 = 900;
/// Maximum delta time for a single frame (prevents a stalled frame from
/// swallowing most of a transition)
pub const MAX_ANIMATION_DT: f32 = 0.05; // ~20 FPS minimum
