pub use optalign_core_rs::alignment::Alignable;
pub use optalign_core_rs::num::Score;
pub use optalign_core_rs::{Sequence, GAP};

pub mod pairwise;
