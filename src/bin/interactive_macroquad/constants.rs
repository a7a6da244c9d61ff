use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_X: f32 = 18.0;
pub const PANEL_Y: f32 = 120.0;
pub const PANEL_WIDTH: f32 = 380.0;
pub const PANEL_HEIGHT: f32 = 330.0;

pub const LEFT_MARGIN: f32 = PANEL_X + PANEL_WIDTH + 110.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

// Flights last well under a second; replay them slowed down.
pub const REPLAY_SLOWDOWN: f32 = 4.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const PATH_COLOR: Color = Color::new(0.212, 0.482, 0.961, 1.0);
pub const LAUNCH_COLOR: Color = Color::new(0.961, 0.349, 0.349, 1.0);
pub const IMPACT_COLOR: Color = Color::new(0.318, 0.788, 0.478, 1.0);
