use macroquad::prelude::*;

use projectile_calculator::calculator::Calculation;
use projectile_calculator::report::EQUATIONS;

use crate::constants::{HEADER_COLOR, PANEL_WIDTH, TITLE_Y, TOP_MARGIN};
use crate::render::{Canvas, draw_ui_text};

const LINE_HEIGHT: f32 = 22.0;
const RESULTS_TOP: f32 = TOP_MARGIN + 280.0;

pub(crate) fn draw_header(left: f32) {
    draw_ui_text("Projectile Motion Calculator", left, TITLE_Y, 30, HEADER_COLOR);
    draw_ui_text(
        "Sliders set v0, angle, height and g | R reset | E equations",
        left,
        TITLE_Y + 30.0,
        20,
        DARKGRAY,
    );
}

fn result_lines(calc: &Calculation) -> Vec<(String, bool)> {
    let m = &calc.motion;
    let e = &calc.energy;
    vec![
        ("Initial velocity".to_string(), true),
        (format!("v0x = {:.2} m/s", m.v0x), false),
        (format!("v0y = {:.2} m/s", m.v0y), false),
        ("Flight".to_string(), true),
        (format!("Time of flight: {:.2} s", m.flight_time_s), false),
        (format!("Maximum height: {:.2} m", m.apex_height_m), false),
        (format!("Time to maximum height: {:.2} s", m.apex_time_s), false),
        (format!("Horizontal range: {:.2} m", m.range_m), false),
        ("Final velocity".to_string(), true),
        (format!("vfx = {:.2} m/s  vfy = {:.2} m/s", m.final_vx, m.final_vy), false),
        (format!("|vf| = {:.2} m/s", m.final_speed), false),
        ("Optimal angle".to_string(), true),
        (
            format!(
                "{:.1} deg reaches {:.2} m",
                calc.optimal.angle_deg, calc.optimal.range_m
            ),
            false,
        ),
        (format!("Energy (mass {:.2} kg)", e.mass_kg), true),
        (
            format!("KE {:.2} J  PE {:.2} J", e.kinetic_j, e.potential_j),
            false,
        ),
        (format!("Total {:.2} J", e.total_j), false),
    ]
}

pub(crate) fn draw_results(calc: &Calculation) {
    let mut y = RESULTS_TOP;
    for (line, heading) in result_lines(calc) {
        if heading {
            y += 6.0;
            draw_ui_text(&line, 24.0, y, 21, HEADER_COLOR);
        } else {
            draw_ui_text(&line, 36.0, y, 19, DARKGRAY);
        }
        y += LINE_HEIGHT;
    }
}

pub(crate) fn draw_error(message: &str) {
    draw_ui_text(message, 24.0, RESULTS_TOP, 20, RED);
}

pub(crate) fn draw_equations(canvas: &Canvas) {
    let lines: Vec<&str> = EQUATIONS.lines().collect();
    let height = lines.len() as f32 * 20.0 + 24.0;
    let x = canvas.left + 24.0;
    let y = canvas.top + 16.0;
    draw_rectangle(x, y, PANEL_WIDTH + 40.0, height, Color::from_rgba(255, 255, 255, 235));
    draw_rectangle_lines(x, y, PANEL_WIDTH + 40.0, height, 1.5, GRAY);
    for (i, line) in lines.iter().enumerate() {
        draw_ui_text(line, x + 14.0, y + 26.0 + i as f32 * 20.0, 18, HEADER_COLOR);
    }
}
