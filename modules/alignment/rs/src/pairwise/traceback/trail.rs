use std::rc::Rc;

use crate::pairwise::alignment::AlignedPair;

struct Node {
    column: (u8, u8),
    next: Option<Rc<Node>>,
}

/// Persistent list of alignment columns.
///
/// The traceback walks from the end of the alignment toward its start, so every step prepends a
/// column and the head is always the leftmost column collected so far. Clones share the whole list.
#[derive(Clone, Default)]
pub(crate) struct Trail {
    head: Option<Rc<Node>>,
    len: usize,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new trail with `column` in front of this one. `self` is left untouched.
    pub fn prepend(&self, column: (u8, u8)) -> Self {
        Self {
            head: Some(Rc::new(Node {
                column,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Columns from left to right.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| node.column)
    }

    pub fn to_pair(&self) -> AlignedPair {
        let pair = AlignedPair::from_columns(self.iter());
        debug_assert_eq!(pair.len(), self.len());
        pair
    }
}

// Long unshared tails would otherwise be released through one recursive drop per node
impl Drop for Trail {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.next.take(),
                Err(_) => break,
            }
        }
    }
}
