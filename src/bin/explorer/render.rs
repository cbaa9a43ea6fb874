use macroquad::prelude::*;

use projectile_calculator::core::trajectory::{MarkerKind, TrajectoryPlot};
use projectile_calculator::core::window::PlotWindow;

use crate::constants::{
    APEX_COLOR, IMPACT_COLOR, LABEL_COLOR, LAUNCH_COLOR, MARKER_RADIUS, TRAJECTORY_COLOR,
    X_GRID_LINES, Y_GRID_LINES,
};

/// Screen rectangle the chart is drawn into, plus the world window it shows.
#[derive(Clone, Copy)]
pub(crate) struct Canvas {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) window: PlotWindow,
}

impl Canvas {
    pub(crate) fn world_to_screen(&self, x_m: f64, y_m: f64) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (x_m / self.window.x_max) as f32 * plot_w;
        let y = self.bottom - (y_m / self.window.y_max) as f32 * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(canvas: &Canvas, color: Color) {
    let Canvas {
        left,
        right,
        top,
        bottom,
        ..
    } = *canvas;
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
    draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
    draw_line(left, top, left, bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(canvas: &Canvas) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = canvas.left + t * (canvas.right - canvas.left);
        let label = format_axis_value(f64::from(t) * canvas.window.x_max, canvas.window.x_max);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            canvas.bottom + 22.0,
            tick_font_size,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = canvas.bottom - t * (canvas.bottom - canvas.top);
        let label = format_axis_value(f64::from(t) * canvas.window.y_max, canvas.window.y_max);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (canvas.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
        );
    }

    draw_ui_text(
        "Horizontal distance (m)",
        canvas.right - 210.0,
        canvas.bottom + 48.0,
        18,
        LABEL_COLOR,
    );
    draw_ui_text("Height (m)", canvas.left + 10.0, canvas.top - 8.0, 18, LABEL_COLOR);
}

pub(crate) fn draw_trajectory(canvas: &Canvas, plot: &TrajectoryPlot) {
    let mut points = plot
        .samples
        .iter()
        .map(|s| canvas.world_to_screen(s.x_m, s.y_m));
    let Some(mut prev) = points.next() else {
        return;
    };
    for cur in points {
        draw_line(prev.x, prev.y, cur.x, cur.y, 3.0, TRAJECTORY_COLOR);
        prev = cur;
    }
}

fn marker_color(kind: MarkerKind) -> Color {
    match kind {
        MarkerKind::Launch => LAUNCH_COLOR,
        MarkerKind::Apex => APEX_COLOR,
        MarkerKind::Impact => IMPACT_COLOR,
    }
}

pub(crate) fn draw_markers(canvas: &Canvas, plot: &TrajectoryPlot) {
    for marker in plot.markers {
        let p = canvas.world_to_screen(marker.x_m, marker.y_m);
        draw_circle(p.x, p.y, MARKER_RADIUS, marker_color(marker.kind));
        draw_circle_lines(p.x, p.y, MARKER_RADIUS, 2.0, DARKGRAY);
    }
}

pub(crate) fn draw_legend(canvas: &Canvas) {
    let x = canvas.right - 190.0;
    let mut y = canvas.top + 20.0;

    draw_line(x, y - 5.0, x + 20.0, y - 5.0, 3.0, TRAJECTORY_COLOR);
    draw_ui_text("Trajectory", x + 30.0, y, 18, DARKGRAY);
    for kind in [MarkerKind::Launch, MarkerKind::Apex, MarkerKind::Impact] {
        y += 24.0;
        draw_circle(x + 10.0, y - 5.0, MARKER_RADIUS - 1.0, marker_color(kind));
        draw_ui_text(kind.label(), x + 30.0, y, 18, DARKGRAY);
    }
}

pub(crate) fn draw_unavailable(canvas: &Canvas, message: &str) {
    let size = measure_text(message, None, 26, 1.0);
    let cx = (canvas.left + canvas.right) * 0.5;
    let cy = (canvas.top + canvas.bottom) * 0.5;
    draw_rectangle(
        cx - size.width * 0.5 - 16.0,
        cy - size.height - 12.0,
        size.width + 32.0,
        size.height + 28.0,
        Color::from_rgba(253, 236, 236, 255),
    );
    draw_ui_text(message, cx - size.width * 0.5, cy, 26, IMPACT_COLOR);
}
