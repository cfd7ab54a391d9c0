/// Iteration and function-call accounting for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Budget {
    max_iter: usize,
    iterations: usize,
    func_calls: usize,
}

impl Budget {
    pub(super) fn new(max_iter: usize) -> Self {
        Self {
            max_iter,
            iterations: 0,
            func_calls: 0,
        }
    }

    /// Starts the next iteration and returns its 1-based index, or `None`
    /// once `max_iter` iterations have run.
    pub(super) fn next_iteration(&mut self) -> Option<usize> {
        if self.iterations >= self.max_iter {
            return None;
        }
        self.iterations += 1;
        Some(self.iterations)
    }

    /// Counts one call to the user function.
    pub(super) fn record_call(&mut self) {
        self.func_calls += 1;
    }

    pub(super) fn iterations(&self) -> usize {
        self.iterations
    }

    pub(super) fn func_calls(&self) -> usize {
        self.func_calls
    }
}
