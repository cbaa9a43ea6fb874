use super::trajectory::TrajectoryPlot;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

/// Visible data window of a chart. Both axes start at zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_max: f64,
    pub y_max: f64,
}

impl PlotWindow {
    /// Tight window around the samples and markers, padded on the far edges.
    pub fn fit(plot: &TrajectoryPlot) -> Self {
        let (raw_x, raw_y) = extent(plot);
        Self {
            x_max: (raw_x + raw_x.max(MIN_SPAN_M) * X_PADDING_RATIO).max(MIN_SPAN_M),
            y_max: (raw_y + raw_y.max(MIN_SPAN_M) * Y_PADDING_RATIO).max(MIN_SPAN_M),
        }
    }

    /// Like [`PlotWindow::fit`], then widened on one axis so that
    /// `x_max / y_max == DISTANCE_TO_HEIGHT_RATIO`.
    pub fn fit_fixed_ratio(plot: &TrajectoryPlot) -> Self {
        let Self {
            mut x_max,
            mut y_max,
        } = Self::fit(plot);

        if x_max / y_max < DISTANCE_TO_HEIGHT_RATIO {
            x_max = y_max * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_max = x_max / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self { x_max, y_max }
    }
}

fn extent(plot: &TrajectoryPlot) -> (f64, f64) {
    let points = plot
        .samples
        .iter()
        .map(|s| (s.x_m, s.y_m))
        .chain(plot.markers.iter().map(|m| (m.x_m, m.y_m)));

    points.fold((0.0_f64, 0.0_f64), |(max_x, max_y), (x, y)| {
        (max_x.max(x), max_y.max(y))
    })
}
