use crate::GAP;

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Represents a gap in the first sequence (v)
    GapFirst,
    /// Represents a gap in the second sequence (^)
    GapSecond,
    /// Represents identical symbols in both sequences (=)
    Match,
    /// Represents different symbols in the sequences (X)
    Mismatch,
}

impl Op {
    /// Classifies an alignment column. Returns `None` for the meaningless gap-gap column.
    pub fn classify(first: u8, second: u8) -> Option<Self> {
        match (first == GAP, second == GAP) {
            (true, true) => None,
            (true, false) => Some(Op::GapFirst),
            (false, true) => Some(Op::GapSecond),
            (false, false) if first == second => Some(Op::Match),
            (false, false) => Some(Op::Mismatch),
        }
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}
