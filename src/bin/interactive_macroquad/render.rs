use macroquad::prelude::*;

use nerf_velocity::core::chart::{X_AXIS_LABEL, Y_AXIS_LABEL};
use nerf_velocity::core::trajectory::TrajectorySample;
use nerf_velocity::core::window::AxisLimits;

use crate::constants::{X_GRID_LINES, Y_GRID_LINES};

/// Screen-space rectangle the chart is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

pub(crate) fn world_to_screen(world: (f64, f64), limits: AxisLimits, area: PlotArea) -> Vec2 {
    let plot_w = (area.right - area.left).max(1.0);
    let plot_h = (area.bottom - area.top).max(1.0);
    let tx = ((world.0 - limits.x_min) / limits.x_span()) as f32;
    let ty = ((world.1 - limits.y_min) / limits.y_span()) as f32;
    vec2(area.left + tx * plot_w, area.bottom - ty * plot_h)
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 100.0 {
        format!("{value:.0}")
    } else if axis_max >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, limits: AxisLimits, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let value = limits.x_min + f64::from(t) * limits.x_span();
        let label = format_axis_value(value, limits.x_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        let value = limits.y_min + f64::from(t) * limits.y_span();
        let label = format_axis_value(value, limits.y_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    let x_label_size = measure_text(X_AXIS_LABEL, font, 18, 1.0);
    draw_ui_text(
        X_AXIS_LABEL,
        area.right - x_label_size.width,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(Y_AXIS_LABEL, area.left + 10.0, area.top - 8.0, 18, label_color, font);
}

pub(crate) fn draw_path(
    samples: &[TrajectorySample],
    limits: AxisLimits,
    area: PlotArea,
    thickness: f32,
    color: Color,
) {
    let mut points = samples
        .iter()
        .map(|s| world_to_screen((s.x_m, s.y_m), limits, area));
    let Some(mut prev) = points.next() else {
        return;
    };
    for cur in points {
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_marker(position: Vec2, fill: Color, outline: Color) {
    draw_circle(position.x, position.y, 7.0, fill);
    draw_circle_lines(position.x, position.y, 7.0, 2.0, outline);
}
