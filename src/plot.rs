use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::core::trajectory::{MarkerKind, TrajectoryPlot};
use crate::core::window::PlotWindow;

const TRAJECTORY_COLOR: RGBColor = RGBColor(31, 99, 214);
const LAUNCH_COLOR: RGBColor = RGBColor(34, 160, 60);
const APEX_COLOR: RGBColor = RGBColor(230, 180, 0);
const IMPACT_COLOR: RGBColor = RGBColor(214, 40, 40);
const MARKER_RADIUS: i32 = 6;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("trajectory unavailable: nothing to plot for these parameters")]
    NoTrajectory,
    #[error("unsupported chart format '{0}', expected .png or .svg")]
    UnsupportedFormat(String),
    #[error("failed to render chart: {0}")]
    Render(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ChartFormat::Png),
            "svg" => Ok(ChartFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// `trajectory_YYYYmmdd_HHMMSS.png` inside `dir` (or the working directory).
pub fn default_output_path(dir: Option<&Path>, now: DateTime<Local>) -> PathBuf {
    let file_name = format!("trajectory_{}.png", now.format("%Y%m%d_%H%M%S"));
    match dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn marker_color(kind: MarkerKind) -> RGBColor {
    match kind {
        MarkerKind::Launch => LAUNCH_COLOR,
        MarkerKind::Apex => APEX_COLOR,
        MarkerKind::Impact => IMPACT_COLOR,
    }
}

/// Renders the trajectory and its markers to a PNG or SVG file.
pub fn render_chart(plot: &TrajectoryPlot, path: &Path, size: (u32, u32)) -> Result<(), PlotError> {
    if !plot.is_plottable() {
        return Err(PlotError::NoTrajectory);
    }

    let window = PlotWindow::fit(plot);
    match ChartFormat::from_path(path)? {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_chart(&root, plot, window).map_err(|e| PlotError::Render(e.to_string()))?;
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_chart(&root, plot, window).map_err(|e| PlotError::Render(e.to_string()))?;
        }
    }

    tracing::info!(path = %path.display(), "wrote trajectory chart");
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &TrajectoryPlot,
    window: PlotWindow,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption("Projectile Trajectory", ("sans-serif", 28).into_font())
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..window.x_max, 0f64..window.y_max)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal distance (m)")
        .y_desc("Height (m)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            plot.samples.iter().map(|s| (s.x_m, s.y_m)),
            TRAJECTORY_COLOR.stroke_width(2),
        ))?
        .label("Trajectory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &TRAJECTORY_COLOR));

    for marker in plot.markers {
        let color = marker_color(marker.kind);
        chart
            .draw_series(std::iter::once(Circle::new(
                (marker.x_m, marker.y_m),
                MARKER_RADIUS,
                color.filled(),
            )))?
            .label(marker.kind.label())
            .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_RADIUS - 1, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
