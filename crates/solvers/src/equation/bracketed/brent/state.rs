use super::super::{Bracket, Point, bracket::Sign};
use super::extrapolation::Extrapolation;

/// Brent's working points.
///
/// - `cur` is the best estimate so far, `|f(cur)| <= |f(blk)|`.
/// - `blk` is the contrapoint; `cur` and `blk` always bracket the root.
/// - `pre` is the previous `cur`.
///
/// `spre` and `scur` are the last two step sizes, used to reject
/// interpolation steps that are not shrinking fast enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct BrentState {
    pre: Point,
    cur: Point,
    blk: Point,
    spre: f64,
    scur: f64,
}

impl BrentState {
    pub(super) fn new(bracket: &Bracket) -> Self {
        let mut state = Self {
            pre: bracket.left(),
            cur: bracket.right(),
            blk: bracket.left(),
            spre: 0.0,
            scur: 0.0,
        };
        state.rebracket();
        state
    }

    pub(super) fn cur(&self) -> Point {
        self.cur
    }

    /// Returns the bracket formed by the best point and its contrapoint.
    pub(super) fn bracket(&self) -> Bracket {
        Bracket::ordered(self.cur, self.blk)
    }

    /// Returns the width between the best point and its contrapoint.
    pub(super) fn width(&self) -> f64 {
        self.blk.x - self.cur.x
    }

    /// Chooses the next point to evaluate.
    ///
    /// `delta` is the smallest step allowed; steps shorter than that are
    /// pushed out to `delta` toward the contrapoint, but never past the
    /// midpoint.
    pub(super) fn next_x<X: Extrapolation>(&mut self, delta: f64) -> f64 {
        let (pre, cur, blk) = (self.pre, self.cur, self.blk);
        let sbis = 0.5 * blk.x - 0.5 * cur.x;

        let trial = (self.spre.abs() > delta && cur.fx.abs() < pre.fx.abs()).then(|| {
            if pre.x == blk.x {
                // secant
                -cur.fx * (cur.x - pre.x) / (cur.fx - pre.fx)
            } else {
                let dpre = (pre.fx - cur.fx) / (pre.x - cur.x);
                let dblk = (blk.fx - cur.fx) / (blk.x - cur.x);
                X::step(cur.fx, pre.fx, blk.fx, dpre, dblk)
            }
        });

        // Accept a step only if it heads toward the contrapoint and covers
        // less than three quarters of the bracket.
        match trial {
            Some(stry)
                if stry * sbis > 0.0
                    && 2.0 * stry.abs() < self.spre.abs().min(3.0 * sbis.abs() - delta) =>
            {
                self.spre = self.scur;
                self.scur = stry;
            }
            _ => {
                self.spre = sbis;
                self.scur = sbis;
            }
        }

        self.pre = cur;

        if self.scur.abs() > delta {
            cur.x + self.scur
        } else {
            cur.x + delta.min(sbis.abs()).copysign(sbis)
        }
    }

    /// Takes in a newly evaluated point as the current estimate.
    pub(super) fn accept(&mut self, point: Point) {
        self.cur = point;
        self.rebracket();
    }

    /// Restores the invariants after `cur` changes.
    fn rebracket(&mut self) {
        if Sign::of(self.pre.fx) != Sign::of(self.cur.fx) {
            self.blk = self.pre;
            self.spre = self.cur.x - self.pre.x;
            self.scur = self.spre;
        }

        if self.blk.fx.abs() < self.cur.fx.abs() {
            self.pre = self.cur;
            self.cur = self.blk;
            self.blk = self.pre;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::extrapolation::InverseQuadratic;
    use super::*;

    fn state(a: (f64, f64), b: (f64, f64)) -> BrentState {
        BrentState::new(&Bracket::new(Point::new(a.0, a.1), Point::new(b.0, b.1)).unwrap())
    }

    #[test]
    fn best_point_has_smallest_value() {
        let s = state((0.0, -0.5), (2.0, 4.0));

        assert_eq!(s.cur(), Point::new(0.0, -0.5));
        assert_eq!(s.bracket().as_array(), [0.0, 2.0]);
    }

    #[test]
    fn equal_values_take_a_bisection_step() {
        // f(x) = x^2 - 2 on [0, 2]
        let mut s = state((0.0, -2.0), (2.0, 2.0));

        let x = s.next_x::<InverseQuadratic>(1e-12);
        assert!((x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_steps_are_pushed_toward_the_contrapoint() {
        let delta = 0.25;
        // The secant step is shorter than delta, so it is pushed out to delta.
        let mut s = state((0.0, 1.0), (0.6, -1e-3));

        let x = s.next_x::<InverseQuadratic>(delta);
        assert!((x - 0.35).abs() < 1e-12);
    }

    #[test]
    fn minimum_step_stops_at_the_midpoint_of_a_narrow_bracket() {
        // The bracket is narrower than delta, so a full delta step would
        // land outside it.
        let mut s = state((0.0, -5e-5), (1e-4, 5e-5));

        let x = s.next_x::<InverseQuadratic>(5e-4);
        assert!((x - 5e-5).abs() < 1e-18);
    }

    #[test]
    fn half_width_of_a_huge_bracket_is_finite() {
        let mut s = state((-1.7e308, -1.7e308), (1.7e308, 1.7e308));

        let x = s.next_x::<InverseQuadratic>(1e-12);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn accept_keeps_a_sign_change_with_the_contrapoint() {
        let mut s = state((0.0, -2.0), (2.0, 2.0));

        let x = s.next_x::<InverseQuadratic>(1e-12);
        s.accept(Point::new(x, x * x - 2.0));

        assert_eq!(s.cur().x, 1.0);
        assert_eq!(s.bracket().as_array(), [1.0, 2.0]);
        assert!(s.width() > 0.0);
    }
}
