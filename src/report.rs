use std::io::{self, Write};

use crate::calculator::Calculation;
use crate::core::kinematics::FlightStatus;

pub const EQUATIONS: &str = "\
Initial velocity components:
  v0x = v0 * cos(theta)
  v0y = v0 * sin(theta)

Position as a function of time:
  x(t) = v0x * t
  y(t) = h0 + v0y * t - 1/2 * g * t^2

Flight time:
  t = (v0y + sqrt(v0y^2 + 2 * g * h0)) / g

Maximum height:
  h_max = h0 + v0y^2 / (2 * g)

Horizontal range:
  x_max = v0x * t

Final velocity:
  vfx = v0x (constant)
  vfy = v0y - g * t
  |vf| = sqrt(vfx^2 + vfy^2)
";

/// Human-readable summary, every quantity rounded to two decimals.
pub fn write_text<W: Write>(writer: &mut W, calc: &Calculation) -> io::Result<()> {
    let p = &calc.params;
    let m = &calc.motion;

    writeln!(writer, "Launch parameters")?;
    writeln!(writer, "  Initial speed: {:.2} m/s", p.speed_mps)?;
    writeln!(writer, "  Launch angle: {:.2} deg", p.angle_deg)?;
    writeln!(writer, "  Launch height: {:.2} m", p.height_m)?;
    writeln!(writer, "  Gravity: {:.2} m/s^2", p.gravity_mps2)?;
    writeln!(writer)?;

    writeln!(writer, "Initial velocity")?;
    writeln!(writer, "  Horizontal component (v0x): {:.2} m/s", m.v0x)?;
    writeln!(writer, "  Vertical component (v0y): {:.2} m/s", m.v0y)?;
    writeln!(writer)?;

    writeln!(writer, "Flight")?;
    writeln!(writer, "  Time of flight: {:.2} s", m.flight_time_s)?;
    writeln!(writer, "  Maximum height: {:.2} m", m.apex_height_m)?;
    writeln!(writer, "  Time to maximum height: {:.2} s", m.apex_time_s)?;
    writeln!(writer, "  Horizontal range: {:.2} m", m.range_m)?;
    writeln!(writer)?;

    writeln!(writer, "Final velocity")?;
    writeln!(writer, "  Horizontal component (vfx): {:.2} m/s", m.final_vx)?;
    writeln!(writer, "  Vertical component (vfy): {:.2} m/s", m.final_vy)?;
    writeln!(writer, "  Magnitude: {:.2} m/s", m.final_speed)?;
    writeln!(writer)?;

    writeln!(writer, "Optimal angle")?;
    writeln!(writer, "  For maximum range from h0 = {:.2} m:", p.height_m)?;
    writeln!(writer, "  Optimal angle: {:.1} deg", calc.optimal.angle_deg)?;
    writeln!(writer, "  Optimal range: {:.2} m", calc.optimal.range_m)?;
    writeln!(writer)?;

    let e = &calc.energy;
    writeln!(writer, "Energy (mass = {:.2} kg)", e.mass_kg)?;
    writeln!(writer, "  Initial kinetic energy: {:.2} J", e.kinetic_j)?;
    writeln!(writer, "  Initial potential energy: {:.2} J", e.potential_j)?;
    writeln!(writer, "  Total energy: {:.2} J", e.total_j)?;
    writeln!(writer)?;

    writeln!(writer, "Trajectory: {}", trajectory_status(calc))?;
    Ok(())
}

fn trajectory_status(calc: &Calculation) -> String {
    match calc.motion.flight {
        FlightStatus::Airborne => format!("{} samples", calc.trajectory.samples.len()),
        FlightStatus::Grounded => {
            "unavailable (no flight: launched level from the ground)".to_string()
        }
        FlightStatus::NoRealLanding => {
            "unavailable (the given parameters have no real landing time)".to_string()
        }
    }
}

pub fn write_json<W: Write>(writer: &mut W, calc: &Calculation) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, calc)?;
    writeln!(writer)
}

/// Sampled trajectory as CSV with columns `time_s,x_m,y_m`.
pub fn write_samples_csv<W: Write>(writer: &mut W, calc: &Calculation) -> io::Result<()> {
    writeln!(writer, "time_s,x_m,y_m")?;
    for s in &calc.trajectory.samples {
        writeln!(writer, "{:.4},{:.4},{:.4}", s.time_s, s.x_m, s.y_m)?;
    }
    Ok(())
}
