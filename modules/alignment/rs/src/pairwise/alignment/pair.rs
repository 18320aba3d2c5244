use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};
use itertools::Itertools;

use super::op::Op;
use crate::GAP;

/// Two equal-length aligned strings: symbols of the original sequences interleaved with gaps ('-').
///
/// Pairs are ordered lexicographically by the first string, then by the second one.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Getters, Dissolve)]
pub struct AlignedPair {
    first: String,
    second: String,
}

impl AlignedPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let (first, second) = (first.into(), second.into());
        ensure!(
            first.is_ascii() && second.is_ascii(),
            "Aligned strings must be ASCII: {first:?} / {second:?}"
        );
        ensure!(
            first.len() == second.len(),
            "Aligned strings must have equal length: {first:?} ({}) vs {second:?} ({})",
            first.len(),
            second.len()
        );
        Ok(Self { first, second })
    }

    /// Builds the pair from alignment columns listed left to right.
    pub(crate) fn from_columns(columns: impl Iterator<Item = (u8, u8)>) -> Self {
        let (first, second) = columns
            .map(|(a, b)| (a as char, b as char))
            .unzip::<char, char, String, String>();
        debug_assert_eq!(first.len(), second.len());
        Self { first, second }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Alignment columns, left to right.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.first.bytes().zip(self.second.bytes())
    }

    /// Alignment operations, left to right.
    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.columns().filter_map(|(a, b)| Op::classify(a, b))
    }

    /// Run-length encoded operations, e.g. "3=1v2X".
    pub fn rle(&self) -> String {
        self.ops()
            .dedup_with_count()
            .map(|(len, op)| format!("{len}{}", op.symbol()))
            .collect()
    }

    /// The first string without gaps, i.e. the aligned part of the first sequence.
    pub fn ungapped_first(&self) -> String {
        self.first.chars().filter(|x| *x != GAP as char).collect()
    }

    /// The second string without gaps, i.e. the aligned part of the second sequence.
    pub fn ungapped_second(&self) -> String {
        self.second.chars().filter(|x| *x != GAP as char).collect()
    }
}

impl Display for AlignedPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.first, self.second)
    }
}
