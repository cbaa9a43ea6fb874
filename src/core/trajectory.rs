use serde::{Deserialize, Serialize};

use super::kinematics::MotionResult;
use super::params::LaunchParameters;

pub const DEFAULT_RESOLUTION: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Launch,
    Apex,
    Impact,
}

impl MarkerKind {
    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Launch => "Launch point",
            MarkerKind::Apex => "Maximum height",
            MarkerKind::Impact => "Impact point",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub kind: MarkerKind,
    pub x_m: f64,
    pub y_m: f64,
}

/// Plot-ready trajectory: the sampled curve plus launch, apex and impact markers.
///
/// An empty `samples` vector means there is no trajectory to plot; renderers
/// show a placeholder instead of the curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPlot {
    pub samples: Vec<TrajectorySample>,
    pub markers: [MarkerPoint; 3],
}

impl TrajectoryPlot {
    pub fn is_plottable(&self) -> bool {
        !self.samples.is_empty()
    }

    pub fn marker(&self, kind: MarkerKind) -> MarkerPoint {
        // markers are always stored launch, apex, impact
        match kind {
            MarkerKind::Launch => self.markers[0],
            MarkerKind::Apex => self.markers[1],
            MarkerKind::Impact => self.markers[2],
        }
    }
}

pub fn position_at_time(
    params: &LaunchParameters,
    result: &MotionResult,
    time_s: f64,
) -> (f64, f64) {
    let x = result.v0x * time_s;
    let y = params.height_m + (result.v0y * time_s)
        - (0.5 * params.gravity_mps2 * time_s * time_s);
    (x, y)
}

pub fn marker_points(params: &LaunchParameters, result: &MotionResult) -> [MarkerPoint; 3] {
    [
        MarkerPoint {
            kind: MarkerKind::Launch,
            x_m: 0.0,
            y_m: params.height_m,
        },
        MarkerPoint {
            kind: MarkerKind::Apex,
            x_m: result.apex_distance_m(),
            y_m: result.apex_height_m,
        },
        MarkerPoint {
            kind: MarkerKind::Impact,
            x_m: result.range_m,
            y_m: 0.0,
        },
    ]
}

/// Samples the flight at `resolution` evenly spaced times, both endpoints
/// included. Resolutions below 2 are raised to 2 so the launch and impact
/// instants are always present.
pub fn sample_trajectory(
    params: &LaunchParameters,
    result: &MotionResult,
    resolution: usize,
) -> TrajectoryPlot {
    let markers = marker_points(params, result);

    if result.flight_time_s <= 0.0 {
        tracing::debug!(flight = ?result.flight, "no trajectory to plot");
        return TrajectoryPlot {
            samples: Vec::new(),
            markers,
        };
    }

    let sample_count = resolution.max(2);
    let last = sample_count - 1;
    let samples = (0..sample_count)
        .map(|i| {
            let time_s = if i == last {
                result.flight_time_s
            } else {
                (i as f64 * result.flight_time_s) / last as f64
            };
            let (x_m, y_m) = position_at_time(params, result, time_s);
            TrajectorySample { time_s, x_m, y_m }
        })
        .collect();

    TrajectoryPlot { samples, markers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::compute_launch;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn plot_for(params: LaunchParameters, resolution: usize) -> (MotionResult, TrajectoryPlot) {
        let result = compute_launch(&params);
        let plot = sample_trajectory(&params, &result, resolution);
        (result, plot)
    }

    #[test]
    fn samples_span_the_whole_flight() {
        let params = LaunchParameters::new(20.0, 45.0, 0.0, 9.81);
        let (result, plot) = plot_for(params, DEFAULT_RESOLUTION);

        assert_eq!(plot.samples.len(), 100);
        let first = plot.samples[0];
        assert_eq!((first.time_s, first.x_m, first.y_m), (0.0, 0.0, 0.0));
        let last = plot.samples[99];
        assert_close(last.time_s, result.flight_time_s, 1e-9);
        assert_close(last.x_m, result.range_m, 1e-9);
        assert_close(last.y_m, 0.0, 1e-9);
    }

    #[test]
    fn time_and_distance_strictly_increase() {
        let params = LaunchParameters::new(30.0, 60.0, 12.0, 9.81);
        let (_, plot) = plot_for(params, 50);

        for pair in plot.samples.windows(2) {
            assert!(pair[1].time_s > pair[0].time_s);
            assert!(pair[1].x_m > pair[0].x_m);
        }
    }

    #[test]
    fn first_sample_starts_at_launch_height() {
        let params = LaunchParameters::new(10.0, 30.0, 7.5, 9.81);
        let (_, plot) = plot_for(params, 10);

        assert_eq!(plot.samples[0].y_m, 7.5);
        assert_eq!(plot.marker(MarkerKind::Launch).y_m, 7.5);
    }

    #[test]
    fn markers_follow_motion_result() {
        let params = LaunchParameters::new(20.0, 45.0, 5.0, 9.81);
        let (result, plot) = plot_for(params, DEFAULT_RESOLUTION);

        let apex = plot.marker(MarkerKind::Apex);
        assert_close(apex.x_m, result.v0x * result.apex_time_s, 1e-12);
        assert_close(apex.y_m, result.apex_height_m, 1e-12);

        let impact = plot.marker(MarkerKind::Impact);
        assert_eq!((impact.x_m, impact.y_m), (result.range_m, 0.0));
    }

    #[test]
    fn samples_never_exceed_apex() {
        let params = LaunchParameters::new(40.0, 70.0, 3.0, 9.81);
        let (result, plot) = plot_for(params, 300);

        for sample in &plot.samples {
            assert!(sample.y_m <= result.apex_height_m + 1e-9);
        }
    }

    #[test]
    fn zero_flight_time_produces_no_samples() {
        let params = LaunchParameters::new(20.0, 0.0, 0.0, 9.81);
        let (_, plot) = plot_for(params, DEFAULT_RESOLUTION);

        assert!(!plot.is_plottable());
        assert!(plot.samples.is_empty());
        assert_eq!(plot.marker(MarkerKind::Impact).x_m, 0.0);
    }

    #[test]
    fn tiny_resolution_keeps_both_endpoints() {
        let params = LaunchParameters::new(20.0, 45.0, 0.0, 9.81);
        let (result, plot) = plot_for(params, 1);

        assert_eq!(plot.samples.len(), 2);
        assert_eq!(plot.samples[0].time_s, 0.0);
        assert_eq!(plot.samples[1].time_s, result.flight_time_s);
    }
}
