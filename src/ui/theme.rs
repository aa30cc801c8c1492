//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - felt greens
pub const BOARD_LIGHT: Color32 = Color32::from_rgb(46, 139, 87);
pub const BOARD_DARK: Color32 = Color32::from_rgb(34, 110, 68);
pub const GRID_LINE: Color32 = Color32::from_rgb(20, 60, 35);
pub const COORD_TEXT: Color32 = Color32::from_rgb(200, 230, 210);

// Disk colors
pub const DARK_DISK: Color32 = Color32::from_rgb(25, 25, 30);
pub const DARK_DISK_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const LIGHT_DISK: Color32 = Color32::from_rgb(250, 250, 252);
pub const LIGHT_DISK_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const HOVER_VALID: Color32 = Color32::from_rgb(240, 220, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn legal_hint() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const DISK_RADIUS_RATIO: f32 = 0.4;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const HINT_RADIUS_RATIO: f32 = 0.12;
