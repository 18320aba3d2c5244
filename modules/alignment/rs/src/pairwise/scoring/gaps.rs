use crate::pairwise::scoring::Score;

// Only linear (per-symbol) gap penalties are supported: every gap column costs the same
pub trait Scorer {
    type Score: Score;

    fn gap(&self) -> Self::Score;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Linear<S: Score> {
    pub penalty: S,
}

impl<S: Score> Linear<S> {
    pub fn new(penalty: S) -> Self {
        Self { penalty }
    }
}

impl<S: Score> Default for Linear<S> {
    fn default() -> Self {
        Self {
            penalty: S::zero() - (S::one() + S::one()),
        }
    }
}

impl<S: Score> Scorer for Linear<S> {
    type Score = S;

    #[inline(always)]
    fn gap(&self) -> Self::Score {
        self.penalty
    }
}
