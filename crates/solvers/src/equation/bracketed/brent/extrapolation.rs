/// The interpolation step that distinguishes the Brent variants.
///
/// Arguments are the function values at the current, previous and blocking
/// points, and the divided differences from the current point to the previous
/// and blocking points. Returns the proposed step from the current point.
pub(super) trait Extrapolation {
    fn step(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64;
}

/// Inverse quadratic interpolation (classic Brent).
pub(super) enum InverseQuadratic {}

impl Extrapolation for InverseQuadratic {
    fn step(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64 {
        -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
    }
}

/// Hyperbolic extrapolation (Bus and Dekker).
pub(super) enum Hyperbolic {}

impl Extrapolation for Hyperbolic {
    fn step(fcur: f64, fpre: f64, fblk: f64, dpre: f64, dblk: f64) -> f64 {
        -fcur * (fblk - fpre) / (fblk * dpre - fpre * dblk)
    }
}
