use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::str::FromStr;

use ahash::{AHashMap, AHashSet};
use derive_getters::Getters;
use eyre::{bail, ensure, eyre, Result};

use crate::pairwise::scoring::Score;
use crate::GAP;

pub trait Scorer {
    type Score: Score;
    type Symbol;

    /// Substitution score for aligning `s1` (first sequence) against `s2` (second sequence).
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Result<Self::Score>;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> Scorer for Equality<S, Symbol> {
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Result<Self::Score> {
        Ok(if a == b { self.equal } else { self.different })
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

/// What to do when a symbol pair is absent from the substitution table.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum MissingPair {
    /// Abort the alignment with an error naming the pair.
    #[default]
    Fail,
    /// Score the pair as 0. Compatible with tables that only list a subset of the pairs.
    Zero,
}

impl Display for MissingPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingPair::Fail => write!(f, "fail"),
            MissingPair::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for MissingPair {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fail" => Ok(MissingPair::Fail),
            "zero" => Ok(MissingPair::Zero),
            _ => bail!("Missing pair policy must be 'fail' or 'zero', got '{s}'"),
        }
    }
}

/// Explicit (seq1 symbol, seq2 symbol) -> score mapping.
///
/// Row symbols form the alphabet of the first sequence, column symbols the alphabet of
/// the second one. The table doesn't have to be square or symmetric.
#[derive(Clone, Debug, Getters)]
pub struct SubstitutionTable<S: Score> {
    rows: Vec<u8>,
    cols: Vec<u8>,
    #[getter(skip)]
    scores: AHashMap<(u8, u8), S>,
    missing: MissingPair,
}

impl<S: Score> SubstitutionTable<S> {
    /// Builds the table from a rectangular grid.
    /// `scores[i][j]` is the score of `rows[i]` vs `cols[j]`.
    pub fn new(rows: Vec<u8>, cols: Vec<u8>, scores: Vec<Vec<S>>) -> Result<Self> {
        Self::validate_labels("row", &rows)?;
        Self::validate_labels("column", &cols)?;
        ensure!(
            rows.len() == scores.len(),
            "Substitution table has {} row labels but {} rows of scores",
            rows.len(),
            scores.len()
        );

        let mut mapping = AHashMap::with_capacity(rows.len() * cols.len());
        for (row, line) in rows.iter().zip(scores) {
            ensure!(
                line.len() == cols.len(),
                "Substitution table row '{}' has {} scores, expected {}",
                *row as char,
                line.len(),
                cols.len()
            );
            for (col, score) in cols.iter().zip(line) {
                mapping.insert((*row, *col), score);
            }
        }

        Ok(Self {
            rows,
            cols,
            scores: mapping,
            missing: MissingPair::default(),
        })
    }

    /// Builds a (possibly sparse) table from individual pair scores.
    /// Later duplicates override earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = ((u8, u8), S)>) -> Self {
        let (mut rows, mut cols) = (Vec::new(), Vec::new());
        let mut scores = AHashMap::new();
        for ((s1, s2), score) in pairs {
            if !rows.contains(&s1) {
                rows.push(s1);
            }
            if !cols.contains(&s2) {
                cols.push(s2);
            }
            scores.insert((s1, s2), score);
        }
        Self {
            rows,
            cols,
            scores,
            missing: MissingPair::default(),
        }
    }

    pub fn with_missing(mut self, missing: MissingPair) -> Self {
        self.missing = missing;
        self
    }

    /// Number of explicitly scored pairs.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, s1: u8, s2: u8) -> Option<S> {
        self.scores.get(&(s1, s2)).copied()
    }

    fn validate_labels(axis: &str, labels: &[u8]) -> Result<()> {
        let mut seen = AHashSet::with_capacity(labels.len());
        for label in labels {
            ensure!(
                label.is_ascii_graphic() && *label != GAP,
                "Invalid substitution table {axis} label {label:#04x}"
            );
            ensure!(
                seen.insert(*label),
                "Duplicated substitution table {axis} label '{}'",
                *label as char
            );
        }
        Ok(())
    }
}

impl<S: Score> Scorer for SubstitutionTable<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &u8, s2: &u8) -> Result<S> {
        match (self.scores.get(&(*s1, *s2)), self.missing) {
            (Some(score), _) => Ok(*score),
            (None, MissingPair::Zero) => {
                log::trace!("No score for ('{}', '{}'), using 0", *s1 as char, *s2 as char);
                Ok(S::zero())
            }
            (None, MissingPair::Fail) => Err(eyre!(
                "Substitution table has no score for the pair ('{}', '{}')",
                *s1 as char,
                *s2 as char
            )),
        }
    }
}
