use roots_core::{Function, Observer};

use super::{Bounds, Bracket, Error, Event, Solution, Status, context::Context};

/// The state after evaluating the initial endpoints.
#[derive(Debug)]
pub(super) enum Init {
    /// The endpoints bracket a root and the method should iterate.
    Bracketed(Bracket),

    /// The solve is already over.
    Done(Solution),
}

/// Evaluates both endpoints and decides whether iteration is needed.
///
/// Ends the solve without iterating when the values share a sign, or when an
/// endpoint already satisfies the function-value tolerance. The lower
/// endpoint wins if both do.
pub(super) fn initialize<F, Obs>(
    ctx: &mut Context<'_, F, Obs>,
    bounds: Bounds,
) -> Result<Init, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event>,
{
    let [xa, xb] = bounds.as_array();
    let a = ctx.endpoint(xa)?;
    let b = ctx.endpoint(xb)?;

    let Ok(bracket) = Bracket::new(a, b) else {
        return Ok(Init::Done(ctx.finish(Status::NotBracketed, None)));
    };

    for point in [bracket.left(), bracket.right()] {
        if ctx.tolerances().is_root(point.fx) {
            return Ok(Init::Done(ctx.finish(Status::Converged, Some(point))));
        }
    }

    Ok(Init::Bracketed(bracket))
}
