//! Studio-themed egui styling.
//!
//! A light, flat look that sits on the pale backdrop behind the figure:
//! soft panels, thin borders, a rose accent for the active pose.

use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Color32, Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Studio color palette
pub mod colors {
    use egui::Color32;

    // Panel backgrounds
    pub const PANEL_BG: Color32 = Color32::from_rgb(252, 250, 250);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(220, 210, 212);

    // Interactive elements
    pub const BUTTON_BG: Color32 = Color32::from_rgb(245, 240, 241);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(255, 228, 225);
    pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(255, 192, 203);
    pub const BUTTON_BORDER: Color32 = Color32::from_rgb(200, 185, 188);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(60, 50, 55);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 110, 115);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(190, 90, 120);

    // Selection/Highlight
    pub const SELECTED: Color32 = Color32::from_rgb(255, 192, 203);
}

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;
/// Corner radius for panels and buttons
pub const CORNER_RADIUS: f32 = 4.0;

/// Create the studio visuals
pub fn studio_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_rounding = Rounding::same(CORNER_RADIUS);
    visuals.menu_rounding = Rounding::same(CORNER_RADIUS);

    // Disable shadows
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = Color32::TRANSPARENT;

    visuals.widgets = studio_widgets();

    visuals.selection.bg_fill = colors::SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ACCENT);

    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

fn widget(bg: Color32, border: Stroke) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: border,
        rounding: Rounding::same(CORNER_RADIUS),
        fg_stroke: Stroke::new(1.0, colors::TEXT_PRIMARY),
        expansion: 0.0,
    }
}

/// Widget visuals for the studio theme
fn studio_widgets() -> Widgets {
    Widgets {
        noninteractive: widget(colors::PANEL_BG, Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER)),
        inactive: widget(colors::BUTTON_BG, Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER)),
        hovered: widget(colors::BUTTON_HOVER, Stroke::new(BORDER_WIDTH, colors::TEXT_ACCENT)),
        active: widget(colors::BUTTON_ACTIVE, Stroke::new(2.0, colors::TEXT_ACCENT)),
        open: widget(colors::BUTTON_ACTIVE, Stroke::new(BORDER_WIDTH, colors::BUTTON_BORDER)),
    }
}

/// Create a studio-themed panel frame
pub fn studio_panel_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .rounding(Rounding::same(CORNER_RADIUS))
        .inner_margin(Margin::same(10.0))
}

/// Create the studio style
pub fn studio_style() -> Style {
    Style {
        visuals: studio_visuals(),
        ..Style::default()
    }
}
