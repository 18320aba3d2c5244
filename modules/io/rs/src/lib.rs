pub mod report;
pub mod substitution;

pub use report::Report;
