//! Brent's method and its hyperbolic variant.
//!
//! Both keep a best estimate and a contrapoint with opposite signs, and try an
//! interpolation step each iteration. A step that would not shrink the bracket
//! quickly enough is replaced by bisection, so the worst case is no slower
//! than bisection while smooth functions converge superlinearly.

mod extrapolation;
mod state;

use roots_core::{Function, Observer};

use super::{Bracket, Error, Event, Solution, Status, context::Context};

use extrapolation::{Extrapolation, Hyperbolic, InverseQuadratic};
use state::BrentState;

/// Brent's method with inverse quadratic interpolation.
pub(super) fn brentq<F, Obs>(
    ctx: &mut Context<'_, F, Obs>,
    bracket: Bracket,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event>,
{
    solve::<InverseQuadratic, F, Obs>(ctx, bracket)
}

/// Brent's method with hyperbolic extrapolation.
pub(super) fn brenth<F, Obs>(
    ctx: &mut Context<'_, F, Obs>,
    bracket: Bracket,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event>,
{
    solve::<Hyperbolic, F, Obs>(ctx, bracket)
}

fn solve<X, F, Obs>(
    ctx: &mut Context<'_, F, Obs>,
    bracket: Bracket,
) -> Result<Solution, Error<F::Error>>
where
    X: Extrapolation,
    F: Function,
    Obs: Observer<Event>,
{
    let delta = 0.5 * ctx.tolerances().xtol();
    let mut state = BrentState::new(&bracket);

    while ctx.next_iteration() {
        let bracket = state.bracket();
        let x = state.next_x::<X>(delta);
        let point = ctx.iterate(x, &bracket)?;
        state.accept(point);

        if ctx.tolerances().is_converged(state.cur(), state.width()) {
            return Ok(ctx.finish(Status::Converged, Some(state.cur())));
        }
    }

    Ok(ctx.finish(Status::MaxIterations, Some(state.cur())))
}
