use std::path::PathBuf;

use macroquad::prelude::*;
use nerf_velocity::CalculatorConfig;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PATH_COLOR, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{PlotArea, draw_axis_tick_labels, draw_grid, draw_path};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Nerf Dart Velocity Calculator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

/// The first command-line argument, if any, names a TOML config file. A bad
/// file is reported and the defaults are used instead.
fn load_config() -> CalculatorConfig {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return CalculatorConfig::default();
    };
    match CalculatorConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}. Falling back to default configuration.");
            CalculatorConfig::default()
        }
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::info!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config());
    state.calculate();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
            top: TOP_MARGIN,
            bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + 1.0),
        };

        clear_background(BACKGROUND);

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        if actions.calculate {
            state.calculate();
        }
        if actions.export {
            state.export();
        }
        state.step_replay(frame_dt);

        draw_grid(area, GRID_COLOR);
        if let Some(calculation) = &state.calculation {
            draw_axis_tick_labels(area, calculation.limits, ui_font.as_ref());
            draw_path(&calculation.samples, calculation.limits, area, 3.0, PATH_COLOR);
        }
        draw_hud(&state, area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
