//! UI rendering using egui.
//!
//! The pose bar, the active-pose caption and the state behind them.

mod pose_bar;
pub mod style;

pub use pose_bar::{draw_pose_bar, draw_pose_caption, PoseBarData};

use crate::constants::POSE_NAME_PREFIX;
use crate::pose::{Pose, PoseId};

/// Actions the UI wants to perform (returned to the application shell)
#[derive(Default)]
pub struct UiActions {
    /// Pose button clicked this frame
    pub pose_clicked: Option<PoseId>,
}

/// What the caption and the active marker show.
///
/// Updated the moment a pose is selected, not when its transition ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseUiState {
    pub active_id: Option<PoseId>,
    pub name_text: String,
    pub desc_text: String,
}

impl PoseUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the active marker to `pose` and show its name and description
    pub fn select(&mut self, pose: &Pose) {
        self.active_id = Some(pose.id);
        self.name_text = format!("{POSE_NAME_PREFIX}{}", pose.name);
        self.desc_text = pose.desc.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::PoseTable;
    use crate::transition::TransitionDriver;

    #[test]
    fn test_select_updates_caption_and_marker() {
        let table = PoseTable::builtin().unwrap();
        let mut ui_state = PoseUiState::new();
        ui_state.select(table.get(3).unwrap());
        assert_eq!(ui_state.active_id, Some(3));
        assert_eq!(ui_state.name_text, "Pose: III");
        assert_eq!(ui_state.desc_text, "One foot in front (near).");
    }

    #[test]
    fn test_caption_changes_before_transition_ends() {
        let mut driver = TransitionDriver::new(PoseTable::builtin().unwrap(), 1, 0.9);
        let mut ui_state = PoseUiState::new();
        ui_state.select(driver.active_pose());

        if let Some(pose) = driver.go_to_pose(6) {
            ui_state.select(pose);
        }
        assert!(driver.is_transitioning());
        assert_eq!(ui_state.name_text, "Pose: VI");
    }

    #[test]
    fn test_unknown_pose_leaves_marker_alone() {
        let mut driver = TransitionDriver::new(PoseTable::builtin().unwrap(), 1, 0.9);
        let mut ui_state = PoseUiState::new();
        ui_state.select(driver.active_pose());
        let before = ui_state.clone();

        if let Some(pose) = driver.go_to_pose(999) {
            ui_state.select(pose);
        }
        assert_eq!(ui_state, before);
    }

    #[test]
    fn test_pose_bar_lists_table_in_order() {
        let data = PoseBarData::from_table(&PoseTable::builtin().unwrap());
        let labels: Vec<&str> = data.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["I", "II", "III", "IV", "V", "VI"]);
    }
}
