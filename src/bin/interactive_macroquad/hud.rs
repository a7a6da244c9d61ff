use macroquad::prelude::*;

use nerf_velocity::core::trajectory::position_at_time;

use crate::constants::{CONTROLS_Y, HEADER_COLOR, IMPACT_COLOR, LAUNCH_COLOR, TITLE_Y};
use crate::model::Calculation;
use crate::render::{PlotArea, draw_marker, draw_ui_text, world_to_screen};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, area: PlotArea, screen_h: f32, font: Option<&Font>) {
    draw_header_block(area, font);
    if let Some(calculation) = &state.calculation {
        draw_flight_markers(state, calculation, area);
        draw_range_label(calculation, area, font);
        draw_results_block(calculation, area.left, screen_h, font);
    }
    draw_ui_text(
        &state.status_line,
        area.left,
        screen_h - 14.0,
        20,
        BLUE,
        font,
    );
}

fn draw_header_block(area: PlotArea, font: Option<&Font>) {
    draw_ui_text(
        "Nerf Gun Muzzle Velocity and Spring Constant Calculator",
        area.left,
        TITLE_Y,
        30,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        "Controls: sliders set the shot | Enter calculate | E export CSV",
        area.left + 12.0,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_flight_markers(state: &AppRuntime, calculation: &Calculation, area: PlotArea) {
    let limits = calculation.limits;
    if let (Some(first), Some(last)) = (calculation.samples.first(), calculation.samples.last()) {
        let launch = world_to_screen((first.x_m, first.y_m), limits, area);
        let impact = world_to_screen((last.x_m, last.y_m), limits, area);
        draw_marker(launch, LAUNCH_COLOR, Color::from_rgba(121, 28, 28, 255));
        draw_marker(impact, IMPACT_COLOR, DARKGREEN);
    }

    if let Some(elapsed) = state.replay_elapsed_s {
        let result = calculation.result;
        let dart = position_at_time(
            result.muzzle_velocity_mps,
            calculation.params.heights.launch_height_m(),
            result.gravity_mps2,
            f64::from(elapsed),
        );
        let p = world_to_screen(dart, limits, area);
        draw_circle(p.x, p.y, 5.0, ORANGE);
    }
}

fn draw_range_label(calculation: &Calculation, area: PlotArea, font: Option<&Font>) {
    let Some(last) = calculation.samples.last() else {
        return;
    };
    let range_label = format!("{:.2} m", last.x_m);
    let range_label_size = measure_text(&range_label, font, 18, 1.0);
    let landing_point = world_to_screen((last.x_m, 0.0), calculation.limits, area);
    let label_x = (landing_point.x - (range_label_size.width * 0.5)).clamp(
        area.left + 4.0,
        (area.right - range_label_size.width - 4.0).max(area.left + 4.0),
    );
    let label_y = (area.bottom - 12.0).max(area.top + 20.0);
    draw_ui_text(&range_label, label_x, label_y, 18, DARKGRAY, font);
}

fn draw_results_block(calculation: &Calculation, left: f32, screen_h: f32, font: Option<&Font>) {
    let result = calculation.result;
    draw_ui_text(
        &format!(
            "Muzzle Velocity: {:.2} m/s | Spring Constant: {:.2} N/m",
            result.muzzle_velocity_mps, result.spring_constant_n_per_m
        ),
        left,
        screen_h - 76.0,
        24,
        HEADER_COLOR,
        font,
    );
    draw_ui_text(
        &format!(
            "Flight: {:.2} s | Drop: {:.2} m | Energy: {:.2} J | Dart: {:.3} kg",
            result.time_of_flight_s,
            result.vertical_drop_m,
            result.muzzle_energy_j,
            result.dart_mass_kg
        ),
        left,
        screen_h - 45.0,
        20,
        DARKGRAY,
        font,
    );
}
