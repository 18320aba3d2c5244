pub use alignment::{AlignedPair, Alignments, Op};
pub use engine::Aligner;
pub use strategy::Strategy;

pub mod alignment;
mod engine;
pub mod matrix;
pub mod scoring;
mod strategy;
pub mod traceback;
