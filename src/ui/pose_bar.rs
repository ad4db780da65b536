//! Pose bar and caption.
//!
//! One button per pose along the bottom edge, with the active one marked,
//! and a caption naming and describing the active pose.

use super::style::{self, colors};
use super::{PoseUiState, UiActions};
use crate::pose::{PoseId, PoseTable};

/// One entry in the pose bar
pub struct PoseButton {
    pub id: PoseId,
    pub label: String,
    pub tooltip: String,
}

/// Data needed to render the pose bar
pub struct PoseBarData {
    pub buttons: Vec<PoseButton>,
}

impl PoseBarData {
    /// One button per pose, in id order
    pub fn from_table(table: &PoseTable) -> Self {
        let buttons = table
            .iter()
            .map(|pose| PoseButton {
                id: pose.id,
                label: pose.name.clone(),
                tooltip: pose.desc.clone(),
            })
            .collect();
        Self { buttons }
    }
}

/// Gap between the pose bar and the bottom edge of the window
const BAR_MARGIN: f32 = 12.0;

/// Render the pose bar centred along the bottom of the window.
/// Only the bar itself takes pointer input; the rest of the strip stays
/// free for dragging the figure.
pub fn draw_pose_bar(
    ctx: &egui::Context,
    data: &PoseBarData,
    ui_state: &PoseUiState,
    actions: &mut UiActions,
) {
    egui::Area::new(egui::Id::new("pose_bar"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -BAR_MARGIN])
        .show(ctx, |ui| {
            style::studio_panel_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for button in &data.buttons {
                        let active = ui_state.active_id == Some(button.id);
                        let text = egui::RichText::new(&button.label).size(18.0).strong();
                        let response = ui
                            .add_sized([56.0, 36.0], egui::Button::new(text).selected(active))
                            .on_hover_text(&button.tooltip);
                        if response.clicked() {
                            actions.pose_clicked = Some(button.id);
                        }
                    }
                });
            });
        });
}

/// Render the active pose's name and description
pub fn draw_pose_caption(ctx: &egui::Context, ui_state: &PoseUiState) {
    egui::Window::new("Pose")
        .fixed_pos([16.0, 16.0])
        .title_bar(false)
        .resizable(false)
        .frame(style::studio_panel_frame())
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(&ui_state.name_text).size(20.0).strong());
            ui.label(egui::RichText::new(&ui_state.desc_text).color(colors::TEXT_MUTED));
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Drag to turn · keys 1-6 select")
                    .small()
                    .color(colors::TEXT_MUTED),
            );
        });
}
