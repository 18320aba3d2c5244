use eyre::{Result, WrapErr};

use super::matrix::{self, Matrices};
use super::traceback::{self, Config};
use super::{scoring, Alignments, Strategy};
use crate::Alignable;

/// Optimal pairwise aligner: fills the alignment matrices and enumerates tied-optimal tracebacks.
///
/// The aligner keeps no state between calls.
#[derive(Clone, Debug)]
pub struct Aligner<Scheme: scoring::Scheme<Symbol = u8>> {
    scoring: Scheme,
    strategy: Strategy,
    config: Config,
}

impl<Scheme: scoring::Scheme<Symbol = u8>> Aligner<Scheme> {
    pub fn new(scoring: Scheme, strategy: Strategy) -> Self {
        Self {
            scoring,
            strategy,
            config: Config::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn with_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Overrides the traceback limits. The alignment limit is still taken from each call.
    pub fn with_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score and direction matrices for the two sequences.
    pub fn matrices<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<Matrices<<Scheme as scoring::Scheme>::Score>>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        matrix::build(seq1, seq2, &self.scoring, self.strategy)
    }

    /// Up to `n` distinct optimal alignments in descending order together with the optimal score.
    pub fn find_optimal_alignments<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
        n: usize,
    ) -> Result<Alignments<<Scheme as scoring::Scheme>::Score>>
    where
        S1: Alignable<Symbol = u8>,
        S2: Alignable<Symbol = u8>,
    {
        let matrices = self
            .matrices(seq1, seq2)
            .wrap_err_with(|| format!("Failed to fill {} alignment matrices", self.strategy))?;
        traceback::enumerate(&matrices, seq1, seq2, &self.config.with_limit(n))
    }
}
