pub use seq::Sequence;

pub mod alignment;
pub mod num;
mod seq;

/// Symbol used to pad aligned strings where one sequence has no counterpart.
pub const GAP: u8 = b'-';
