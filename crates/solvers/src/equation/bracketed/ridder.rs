use roots_core::{Function, Observer};

use super::{Bracket, Error, Event, Point, Solution, Status, context::Context};

/// Ridder's method.
///
/// Each iteration evaluates the midpoint and then the exponential
/// interpolation through the three known points, so it costs up to two
/// evaluations. When the interpolation is unusable the iteration falls back
/// to a plain bisection step.
pub(super) fn solve<F, Obs>(
    ctx: &mut Context<'_, F, Obs>,
    mut bracket: Bracket,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event>,
{
    let mut last = None;

    while ctx.next_iteration() {
        let mid = ctx.iterate(bracket.midpoint(), &bracket)?;
        if ctx.tolerances().is_root(mid.fx) {
            return Ok(ctx.finish(Status::Converged, Some(mid)));
        }

        let point = match interpolate(&bracket, mid) {
            Some(x) => {
                let point = ctx.iterate(x, &bracket)?;
                bracket.shrink_pair(mid, point);
                point
            }
            None => {
                bracket.shrink(mid);
                mid
            }
        };
        last = Some(point);

        if ctx.tolerances().is_converged(point, bracket.width()) {
            return Ok(ctx.finish(Status::Converged, last));
        }
    }

    Ok(ctx.finish(Status::MaxIterations, last))
}

/// Returns Ridder's next estimate, or `None` if it is not usable.
///
/// The estimate must be finite and strictly inside the bracket.
fn interpolate(bracket: &Bracket, mid: Point) -> Option<f64> {
    let (a, b) = (bracket.left(), bracket.right());

    let d = mid.fx * mid.fx - a.fx * b.fx;
    if d.is_nan() || d <= 0.0 {
        return None;
    }

    let sign = if a.fx < b.fx { -1.0 } else { 1.0 };
    let x = mid.x + (mid.x - a.x) * sign * mid.fx / d.sqrt();

    (x.is_finite() && bracket.contains(x)).then_some(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interpolation_is_exact_for_linear_functions() {
        // f(x) = x - 1 on [0, 4]
        let bracket = Bracket::new(Point::new(0.0, -1.0), Point::new(4.0, 3.0)).unwrap();
        let mid = Point::new(2.0, 1.0);

        let x = interpolate(&bracket, mid).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_handles_decreasing_functions() {
        // f(x) = 1 - x on [0, 4]
        let bracket = Bracket::new(Point::new(0.0, 1.0), Point::new(4.0, -3.0)).unwrap();
        let mid = Point::new(2.0, -1.0);

        let x = interpolate(&bracket, mid).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_rejects_non_positive_discriminant() {
        let bracket = Bracket::new(Point::new(0.0, 0.0), Point::new(4.0, 3.0)).unwrap();

        assert_eq!(interpolate(&bracket, Point::new(2.0, 0.0)), None);
    }
}
