/// Traceback directions of a single matrix cell: every predecessor that achieves the cell's score.
///
/// Ties keep all qualifying flags set, which is what makes several optimal alignments possible.
/// A cell without flags is a traceback terminus.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Directions {
    /// From the cell above: a symbol of the first sequence against a gap.
    pub up: bool,
    /// From the upper-left cell: a symbol of each sequence.
    pub diagonal: bool,
    /// From the cell on the left: a gap against a symbol of the second sequence.
    pub left: bool,
}

impl Directions {
    pub const NONE: Directions = Directions::new(false, false, false);
    pub const UP: Directions = Directions::new(true, false, false);
    pub const LEFT: Directions = Directions::new(false, false, true);

    pub const fn new(up: bool, diagonal: bool, left: bool) -> Self {
        Self { up, diagonal, left }
    }

    /// Number of set flags.
    pub fn count(&self) -> usize {
        self.up as usize + self.diagonal as usize + self.left as usize
    }

    pub fn is_terminus(&self) -> bool {
        self.count() == 0
    }
}
