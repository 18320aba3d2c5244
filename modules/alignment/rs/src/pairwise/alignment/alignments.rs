use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use super::pair::AlignedPair;
use crate::Score;

/// Optimal alignments of two sequences, sorted in descending order, sharing one optimal score.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct Alignments<S: Score> {
    pairs: Vec<AlignedPair>,
    score: S,
    /// True if the traceback search was stopped by the visited states cap before it could finish.
    truncated: bool,
}

impl<S: Score> Alignments<S> {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlignedPair> {
        self.pairs.iter()
    }
}

impl<S: Score> IntoIterator for Alignments<S> {
    type Item = AlignedPair;
    type IntoIter = std::vec::IntoIter<AlignedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
