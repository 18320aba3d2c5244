//! Enumeration of tied-optimal alignments hidden in the direction matrix.
//!
//! The search is an explicit LIFO worklist: every state is a matrix cell plus the trail of
//! alignment columns collected on the way from the start cell. Branches share trail prefixes,
//! so a fork costs one allocation regardless of how long the alignment already is.

pub use config::Config;
pub use enumerator::enumerate;

mod config;
mod enumerator;
mod trail;
