use derive_getters::{Dissolve, Getters};
use eyre::{bail, Result, WrapErr};

use super::directions::Directions;
use super::grid::Grid;
use crate::pairwise::{scoring, Strategy};
use crate::{Alignable, Score};

/// Score and direction matrices of a pairwise alignment.
///
/// Both matrices have (len(seq1) + 1) rows and (len(seq2) + 1) columns. Cell (i, j) describes
/// the best alignment of the first i symbols of seq1 with the first j symbols of seq2.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Matrices<S: Score> {
    scores: Grid<S>,
    directions: Grid<Directions>,
    strategy: Strategy,
}

impl<S: Score> Matrices<S> {
    /// (rows, cols) of both matrices.
    pub fn shape(&self) -> (usize, usize) {
        self.scores.shape()
    }

    /// The optimal alignment score: the bottom-right cell for global alignments,
    /// the matrix maximum for local ones.
    pub fn optimum(&self) -> S {
        match self.strategy {
            Strategy::Global => self.scores[(self.scores.rows() - 1, self.scores.cols() - 1)],
            Strategy::Local => self
                .scores
                .cells()
                .map(|(_, score)| *score)
                .max()
                .unwrap_or_else(S::zero),
        }
    }
}

/// Fills the score and direction matrices for two sequences.
///
/// Every inner cell takes the best of three candidates:
/// - diagonal: score(i - 1, j - 1) + substitution score of seq1[i - 1] and seq2[j - 1]
/// - up: score(i - 1, j) + gap penalty
/// - left: score(i, j - 1) + gap penalty
///
/// Local alignments additionally clamp the cell at zero. The direction flags always credit the
/// candidates equal to the stored value, the clamp itself is never a direction.
pub fn build<S, Scheme, Seq1, Seq2>(
    seq1: &Seq1,
    seq2: &Seq2,
    scheme: &Scheme,
    strategy: Strategy,
) -> Result<Matrices<S>>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S>,
    Seq1: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
    Seq2: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
{
    let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
    let mut scores = Grid::<S>::new(rows, cols);
    let mut directions = Grid::<Directions>::new(rows, cols);
    let gap = scheme.gap();

    // Local alignments start anywhere: the first row/column stay at zero without directions
    if strategy == Strategy::Global {
        for row in 1..rows {
            scores[(row, 0)] = add(scores[(row - 1, 0)], gap, (row, 0))?;
            directions[(row, 0)] = Directions::UP;
        }
        for col in 1..cols {
            scores[(0, col)] = add(scores[(0, col - 1)], gap, (0, col))?;
            directions[(0, col)] = Directions::LEFT;
        }
    }

    for i in 0..seq1.len() {
        let s1 = seq1.at(i);
        for j in 0..seq2.len() {
            let substitution = scheme
                .score(s1, seq2.at(j))
                .wrap_err_with(|| format!("Failed to score seq1[{i}] against seq2[{j}]"))?;

            let cell = (i + 1, j + 1);
            let diagonal = add(scores[(i, j)], substitution, cell)?;
            let up = add(scores[(i, j + 1)], gap, cell)?;
            let left = add(scores[(i + 1, j)], gap, cell)?;

            let mut best = diagonal.max(up).max(left);
            if strategy.is_local() {
                best = best.max(S::zero());
            }

            scores[cell] = best;
            directions[cell] = Directions::new(up == best, diagonal == best, left == best);
        }
    }
    log::debug!("Filled {strategy} alignment matrices: {rows} x {cols}");

    Ok(Matrices {
        scores,
        directions,
        strategy,
    })
}

#[inline(always)]
fn add<S: Score>(score: S, delta: S, (row, col): (usize, usize)) -> Result<S> {
    match score.checked_add(&delta) {
        Some(sum) => Ok(sum),
        None => bail!(
            "Score overflow in the alignment matrix cell ({row}, {col}): {score} + {delta}"
        ),
    }
}
