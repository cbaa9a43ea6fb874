use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;

pub const PANEL_WIDTH: f32 = 380.0;
pub const LEFT_MARGIN: f32 = PANEL_WIDTH + 110.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 90.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const MARKER_RADIUS: f32 = 7.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.212, 0.482, 0.961, 1.0);
pub const LAUNCH_COLOR: Color = Color::new(0.133, 0.627, 0.235, 1.0);
pub const APEX_COLOR: Color = Color::new(0.902, 0.706, 0.0, 1.0);
pub const IMPACT_COLOR: Color = Color::new(0.839, 0.157, 0.157, 1.0);
