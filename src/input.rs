//! Input handling.
//!
//! Keyboard shortcuts for pose selection and pointer drag for turning the
//! figure. Nothing here knows about the scene; results are handed back to
//! the application shell.

use crate::pose::PoseId;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Input state tracking
pub struct InputState {
    pub keys_pressed: HashSet<KeyCode>,
    pub mouse_pos: (f32, f32),
    pub drag: DragRotation,
}

impl InputState {
    pub fn new(drag_sensitivity: f32) -> Self {
        Self {
            keys_pressed: HashSet::new(),
            mouse_pos: (0.0, 0.0),
            drag: DragRotation::new(drag_sensitivity),
        }
    }
}

/// Result of processing keyboard input
#[derive(Default)]
pub struct InputResult {
    /// User wants to toggle fullscreen
    pub toggle_fullscreen: bool,
    /// Pose selected with a digit key
    pub pose: Option<PoseId>,
}

const POSE_KEYS: [(KeyCode, PoseId); 6] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
    (KeyCode::Digit6, 6),
];

/// Process keyboard input and return actions to take
pub fn process_keyboard(input: &mut InputState) -> InputResult {
    let mut result = InputResult::default();

    if input.keys_pressed.remove(&KeyCode::F11) {
        result.toggle_fullscreen = true;
    }

    // Only process once per key press; the last digit in table order wins
    for (key, id) in POSE_KEYS {
        if input.keys_pressed.remove(&key) {
            result.pose = Some(id);
        }
    }

    result
}

/// Turns horizontal pointer drags into figure yaw.
///
/// Purely additive: no wraparound, no clamping, no momentum.
#[derive(Debug, Clone, Copy)]
pub struct DragRotation {
    sensitivity: f32,
    dragging: bool,
    last_x: f32,
}

impl DragRotation {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            dragging: false,
            last_x: 0.0,
        }
    }

    #[allow(dead_code)] // Public API for debugging/inspection
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, x: f32) {
        self.dragging = true;
        self.last_x = x;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved to `x`; returns the yaw to add (radians)
    pub fn motion(&mut self, x: f32) -> f32 {
        if !self.dragging {
            return 0.0;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        dx * self.sensitivity
    }
}
