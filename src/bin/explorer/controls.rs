use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use projectile_calculator::core::params::{ANGLE_RANGE, GRAVITY_RANGE, HEIGHT_RANGE, SPEED_RANGE};

use crate::constants::{PANEL_WIDTH, TOP_MARGIN};
use crate::state::ExplorerState;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reset: bool,
    pub(crate) toggle_equations: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reset: self.reset || other.reset,
            toggle_equations: self.toggle_equations || other.toggle_equations,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reset: is_key_pressed(KeyCode::R),
        toggle_equations: is_key_pressed(KeyCode::E),
    }
}

pub(crate) fn draw_control_panel(state: &mut ExplorerState) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, TOP_MARGIN), vec2(PANEL_WIDTH, 250.0))
        .label("Input Parameters")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Initial speed (m/s)",
                SPEED_RANGE.min as f32..SPEED_RANGE.max as f32,
                &mut state.speed_mps,
            );
            ui.slider(
                hash!(),
                "Launch angle (deg)",
                ANGLE_RANGE.min as f32..ANGLE_RANGE.max as f32,
                &mut state.angle_deg,
            );
            ui.slider(
                hash!(),
                "Launch height (m)",
                HEIGHT_RANGE.min as f32..HEIGHT_RANGE.max as f32,
                &mut state.height_m,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_RANGE.min as f32..GRAVITY_RANGE.max as f32,
                &mut state.gravity_mps2,
            );
            ui.separator();
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Equations (E)") {
                actions.toggle_equations = true;
            }
        });

    actions
}

pub(crate) fn apply_actions(state: &mut ExplorerState, actions: FrameActions) {
    if actions.reset {
        state.reset();
        tracing::info!("parameters reset to defaults");
    }
    if actions.toggle_equations {
        state.show_equations = !state.show_equations;
    }
}
