pub use alignments::Alignments;
pub use op::Op;
pub use pair::AlignedPair;

mod alignments;
mod op;
mod pair;
