use roots_core::{Function, Observer};

use super::{Bracket, Error, Event, Solution, Status, context::Context};

/// Halves the bracket once per iteration.
///
/// Each iteration costs one evaluation and keeps the half whose endpoints
/// still differ in sign. Unless `|f|` gets below `epsilon` first, a bracket of
/// width `W` takes `ceil(log2(W / xtol))` iterations. The width test is strict,
/// so when `W / xtol` is an exact power of two one more iteration is needed:
/// `[0, 1]` with `xtol = 0.25` stops after three halvings, not two.
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
        let point = ctx.iterate(bracket.midpoint(), &bracket)?;
        bracket.shrink(point);
        last = Some(point);

        if ctx.tolerances().is_converged(point, bracket.width()) {
            return Ok(ctx.finish(Status::Converged, last));
        }
    }

    Ok(ctx.finish(Status::MaxIterations, last))
}
