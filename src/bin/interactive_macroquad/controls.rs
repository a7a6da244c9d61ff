use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) calculate: bool,
    pub(crate) export: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            calculate: self.calculate || other.calculate,
            export: self.export || other.export,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        calculate: is_key_pressed(KeyCode::Enter),
        export: is_key_pressed(KeyCode::E),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let gravity = state.config.gravity_mps2;
    let default_mass = state.config.default_dart_mass_kg;

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launcher Inputs")
    .ui(&mut *root_ui(), |ui| {
        ui.label(None, &format!("g = {gravity:.2} m/s^2, no drag"));
        ui.separator();
        ui.slider(hash!(), "Range (m)", 0.1..50.0, &mut state.form.range_m);
        ui.slider(
            hash!(),
            "Spring compression (m)",
            0.01..0.5,
            &mut state.form.spring_compression_m,
        );
        ui.slider(hash!(), "Starting height (m)", 0.0..5.0, &mut state.form.start_height_m);
        ui.slider(hash!(), "Ending height (m)", 0.0..5.0, &mut state.form.end_height_m);
        ui.checkbox(
            hash!(),
            &format!("Default dart mass ({default_mass} kg)"),
            &mut state.form.use_default_mass,
        );
        if !state.form.use_default_mass {
            ui.slider(hash!(), "Dart mass (kg)", 0.001..0.1, &mut state.form.dart_mass_kg);
        }
        ui.separator();
        if ui.button(None, "Calculate (Enter)") {
            actions.calculate = true;
        }
        if ui.button(None, "Export CSV (E)") {
            actions.export = true;
        }
    });

    actions
}
