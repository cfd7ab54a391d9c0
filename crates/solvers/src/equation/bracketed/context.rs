use roots_core::{Function, Observer};

use super::{
    Bracket, Error, Event, Point, Solution, Status, budget::Budget, convergence::Tolerances,
};

/// Everything a method needs while it runs: the function, the observer, and
/// the counters.
///
/// All function calls go through here so that counting, NaN checks and
/// events cannot be skipped by a method.
pub(super) struct Context<'a, F, Obs> {
    function: &'a F,
    observer: &'a mut Obs,
    budget: Budget,
    tolerances: Tolerances,
    iter: usize,
}

impl<'a, F, Obs> Context<'a, F, Obs>
where
    F: Function,
    Obs: Observer<Event>,
{
    pub(super) fn new(
        function: &'a F,
        observer: &'a mut Obs,
        budget: Budget,
        tolerances: Tolerances,
    ) -> Self {
        Self {
            function,
            observer,
            budget,
            tolerances,
            iter: 0,
        }
    }

    pub(super) fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Starts the next iteration, returning false once the budget is spent.
    pub(super) fn next_iteration(&mut self) -> bool {
        match self.budget.next_iteration() {
            Some(iter) => {
                self.iter = iter;
                true
            }
            None => false,
        }
    }

    /// Evaluates an initial endpoint.
    pub(super) fn endpoint(&mut self, x: f64) -> Result<Point, Error<F::Error>> {
        let point = self.evaluate(x)?;
        self.observer.observe(&Event::Endpoint {
            point,
            func_calls: self.budget.func_calls(),
        });
        Ok(point)
    }

    /// Evaluates a point chosen from `bracket` during the current iteration.
    pub(super) fn iterate(
        &mut self,
        x: f64,
        bracket: &Bracket,
    ) -> Result<Point, Error<F::Error>> {
        let point = self.evaluate(x)?;
        self.observer.observe(&Event::Iterate {
            iter: self.iter,
            func_calls: self.budget.func_calls(),
            point,
            bracket: *bracket,
        });
        Ok(point)
    }

    /// Builds the solution from the counters accumulated so far.
    pub(super) fn finish(&self, status: Status, point: Option<Point>) -> Solution {
        Solution::new(
            status,
            point,
            self.budget.iterations(),
            self.budget.func_calls(),
        )
    }

    fn evaluate(&mut self, x: f64) -> Result<Point, Error<F::Error>> {
        self.budget.record_call();
        let fx = self
            .function
            .call(x)
            .map_err(|source| Error::Function { x, source })?;

        if fx.is_nan() {
            return Err(Error::NotANumber { x });
        }

        Ok(Point::new(x, fx))
    }
}
