use std::collections::BTreeSet;

use eyre::{ensure, Result};

use super::config::Config;
use super::trail::Trail;
use crate::pairwise::alignment::{AlignedPair, Alignments};
use crate::pairwise::matrix::Matrices;
use crate::pairwise::Strategy;
use crate::{Alignable, Score, GAP};

struct State {
    row: usize,
    col: usize,
    trail: Trail,
}

impl State {
    fn start(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            trail: Trail::new(),
        }
    }

    fn step(&self, row: usize, col: usize, column: (u8, u8)) -> Self {
        Self {
            row,
            col,
            trail: self.trail.prepend(column),
        }
    }
}

/// Enumerates up to `config.limit()` distinct optimal alignments encoded in the matrices.
///
/// Global searches start at the bottom-right cell, local ones at every cell holding the matrix
/// maximum (row-major order). A branch completes at a cell without directions or, for local
/// alignments, at a zero score. Pending branches live on a stack: for each cell the left, up and
/// diagonal successors are pushed in this order, hence the diagonal one is explored first.
///
/// The returned pairs are the first distinct alignments discovered, sorted in descending order.
pub fn enumerate<S, Seq1, Seq2>(
    matrices: &Matrices<S>,
    seq1: &Seq1,
    seq2: &Seq2,
    config: &Config,
) -> Result<Alignments<S>>
where
    S: Score,
    Seq1: Alignable<Symbol = u8>,
    Seq2: Alignable<Symbol = u8>,
{
    let (rows, cols) = matrices.shape();
    ensure!(
        rows == seq1.len() + 1 && cols == seq2.len() + 1,
        "Alignment matrices {rows} x {cols} don't match sequences of length {} and {}",
        seq1.len(),
        seq2.len()
    );

    let (scores, directions) = (matrices.scores(), matrices.directions());
    let strategy = *matrices.strategy();
    let optimum = matrices.optimum();

    let mut pending = match strategy {
        Strategy::Global => vec![State::start(rows - 1, cols - 1)],
        // Nothing scores above the empty alignment
        Strategy::Local if optimum == S::zero() => Vec::new(),
        Strategy::Local => scores
            .cells()
            .filter(|(_, score)| **score == optimum)
            .map(|((row, col), _)| State::start(row, col))
            .collect(),
    };

    let (limit, max_visited) = (*config.limit(), *config.max_visited());
    let mut completed = BTreeSet::<AlignedPair>::new();
    let mut visited = 0;
    let mut truncated = false;

    while completed.len() < limit {
        let Some(state) = pending.pop() else { break };
        if visited >= max_visited {
            truncated = true;
            log::warn!(
                "Traceback stopped after visiting {visited} states, \
                 reporting {} of at most {limit} alignments",
                completed.len()
            );
            break;
        }
        visited += 1;

        let (row, col) = (state.row, state.col);
        let flags = directions[(row, col)];
        if flags.is_terminus() || (strategy.is_local() && scores[(row, col)] == S::zero()) {
            completed.insert(state.trail.to_pair());
            continue;
        }

        if flags.left {
            pending.push(state.step(row, col - 1, (GAP, *seq2.at(col - 1))));
        }
        if flags.up {
            pending.push(state.step(row - 1, col, (*seq1.at(row - 1), GAP)));
        }
        if flags.diagonal {
            pending.push(state.step(row - 1, col - 1, (*seq1.at(row - 1), *seq2.at(col - 1))));
        }
    }
    log::debug!(
        "Traceback ({strategy}): {visited} states visited, {} alignments completed, {} pending",
        completed.len(),
        pending.len()
    );

    let pairs = completed.into_iter().rev().take(limit).collect();
    Ok(Alignments::new(pairs, optimum, truncated))
}
