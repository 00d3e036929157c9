//! Newton-Raphson solver for Kepler's equation `E - e·sin(E) = M`.

use log::warn;

/// Residual below which the solution is accepted (radians)
const TOLERANCE: f64 = 1e-10;
/// Iteration cap; realistic eccentricities converge in a handful of steps
const MAX_ITERATIONS: u32 = 1000;

/// Solve for the eccentric anomaly in radians, given the mean anomaly in degrees.
///
/// Never fails: if the cap is reached the last estimate is returned and a warning logged.
pub fn solve_eccentric_anomaly(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    let mut e = m;

    for _ in 0..MAX_ITERATIONS {
        let delta = e - eccentricity * e.sin() - m;
        if delta.abs() < TOLERANCE {
            return e;
        }
        e -= delta / (1.0 - eccentricity * e.cos());
    }

    warn!(
        "Kepler solver did not converge (M = {mean_anomaly_deg}°, e = {eccentricity}); using last estimate"
    );
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn residual(e_anom: f64, m_deg: f64, ecc: f64) -> f64 {
        e_anom - ecc * e_anom.sin() - m_deg.to_radians()
    }

    #[test]
    fn test_circular_orbit_returns_mean_anomaly() {
        for m in [0.0, 45.0, 180.0, 359.0] {
            assert_abs_diff_eq!(
                solve_eccentric_anomaly(m, 0.0),
                f64::to_radians(m),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_earth_eccentricity_satisfies_equation() {
        for m in (0..360).step_by(15) {
            let m = m as f64;
            let e = solve_eccentric_anomaly(m, 0.016_718);
            assert!(residual(e, m, 0.016_718).abs() < 1e-10);
        }
    }

    #[test]
    fn test_high_eccentricity_still_converges() {
        let e = solve_eccentric_anomaly(10.0, 0.9);
        assert!(residual(e, 10.0, 0.9).abs() < 1e-10);
    }

    #[test]
    fn test_apsides_are_fixed_points() {
        assert_abs_diff_eq!(solve_eccentric_anomaly(0.0, 0.0549), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            solve_eccentric_anomaly(180.0, 0.0549),
            std::f64::consts::PI,
            epsilon = 1e-10
        );
    }
}
