use macroquad::prelude::*;

use projectile_calculator::config::Config;
use projectile_calculator::core::kinematics::FlightStatus;
use projectile_calculator::core::window::PlotWindow;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN,
};
use crate::controls::{apply_actions, draw_control_panel, hotkey_actions};
use crate::hud::{draw_equations, draw_error, draw_header, draw_results};
use crate::render::{
    Canvas, draw_axis_tick_labels, draw_grid, draw_legend, draw_markers, draw_trajectory,
    draw_unavailable,
};
use crate::state::ExplorerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Explorer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn unavailable_message(flight: FlightStatus) -> &'static str {
    match flight {
        FlightStatus::NoRealLanding => "Trajectory unavailable: no real landing time",
        _ => "Trajectory unavailable: no flight for these parameters",
    }
}

pub(crate) async fn run() {
    let config = Config::load_from_default_path();
    let mut state = ExplorerState::new(&config);
    tracing::info!(params = ?state.params(), "explorer started");

    loop {
        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);

        clear_background(BACKGROUND);
        draw_header(LEFT_MARGIN);

        match state.calculate() {
            Ok(calc) => {
                let canvas = Canvas {
                    left: LEFT_MARGIN,
                    right: screen_width() - RIGHT_MARGIN,
                    top: TOP_MARGIN,
                    bottom: screen_height() - BOTTOM_MARGIN,
                    window: PlotWindow::fit_fixed_ratio(&calc.trajectory),
                };

                draw_grid(&canvas, GRID_COLOR);
                draw_axis_tick_labels(&canvas);
                if calc.trajectory.is_plottable() {
                    draw_trajectory(&canvas, &calc.trajectory);
                    draw_markers(&canvas, &calc.trajectory);
                    draw_legend(&canvas);
                } else {
                    draw_unavailable(&canvas, unavailable_message(calc.motion.flight));
                }
                if state.show_equations {
                    draw_equations(&canvas);
                }
                draw_results(&calc);
            }
            Err(err) => draw_error(&err.to_string()),
        }

        next_frame().await;
    }
}
